use chrono::{DateTime, Utc};
use sea_orm::{IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::game_entity as games;
use crate::error::{AppError, AppResult};
use crate::utils::{generate_id, validate_code};

/// 游戏新增/修改参数
/// id 为空表示新增, 否则为修改; copy_game_code 非空时在保存后
/// 从来源游戏复制玩法配置
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GameParam {
    /// 内部ID (为空表示新增)
    pub id: Option<String>,
    /// 游戏代码
    pub game_code: String,
    /// 游戏名称
    pub game_name: String,
    /// 排序号
    pub order_no: Option<i32>,
    /// 状态 ("1"=启用, "0"=禁用)
    pub state: String,
    /// 备注
    pub remarks: Option<String>,
    /// 复制玩法的来源游戏代码 (为空不复制)
    pub copy_game_code: Option<String>,
}

impl GameParam {
    /// 参数校验 (必填项与格式)
    pub fn validate(&self) -> AppResult<()> {
        if self.game_code.trim().is_empty() {
            return Err(AppError::ValidationError("game_code is required".into()));
        }
        validate_code("game_code", self.game_code.trim())?;
        if self.game_name.trim().is_empty() {
            return Err(AppError::ValidationError("game_name is required".into()));
        }
        if self.state.trim().is_empty() {
            return Err(AppError::ValidationError("state is required".into()));
        }
        Ok(())
    }

    /// 取有效ID (空白等同于未提供)
    pub fn existing_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// 取有效的复制来源代码 (空白等同于未提供)
    pub fn copy_source(&self) -> Option<&str> {
        self.copy_game_code
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// 构造新实体 (生成新ID)
    pub fn to_new_active_model(&self) -> games::ActiveModel {
        games::ActiveModel {
            id: Set(generate_id()),
            game_code: Set(self.game_code.trim().to_string()),
            game_name: Set(self.game_name.clone()),
            order_no: Set(self.order_no),
            state: Set(self.state.clone()),
            remarks: Set(self.remarks.clone()),
            created_at: Set(Some(Utc::now())),
            updated_at: Set(None),
        }
    }

    /// 将参数字段逐项覆盖到已有实体
    pub fn apply_to(&self, model: games::Model) -> games::ActiveModel {
        let mut am = model.into_active_model();
        am.game_code = Set(self.game_code.trim().to_string());
        am.game_name = Set(self.game_name.clone());
        am.order_no = Set(self.order_no);
        am.state = Set(self.state.clone());
        am.remarks = Set(self.remarks.clone());
        am.updated_at = Set(Some(Utc::now()));
        am
    }
}

/// 游戏视图
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameVO {
    /// 内部ID
    pub id: String,
    /// 游戏代码
    pub game_code: String,
    /// 游戏名称
    pub game_name: String,
    /// 排序号
    pub order_no: Option<i32>,
    /// 状态
    pub state: String,
    /// 备注
    pub remarks: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<games::Model> for GameVO {
    fn from(m: games::Model) -> Self {
        GameVO {
            id: m.id,
            game_code: m.game_code,
            game_name: m.game_name,
            order_no: m.order_no,
            state: m.state,
            remarks: m.remarks,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_param() -> GameParam {
        GameParam {
            id: None,
            game_code: "cqssc".to_string(),
            game_name: "重庆时时彩".to_string(),
            order_no: Some(1),
            state: "1".to_string(),
            remarks: None,
            copy_game_code: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(base_param().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut p = base_param();
        p.game_code = "  ".to_string();
        assert!(p.validate().is_err());

        let mut p = base_param();
        p.game_name = String::new();
        assert!(p.validate().is_err());

        let mut p = base_param();
        p.state = String::new();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_blank_id_means_create() {
        let mut p = base_param();
        assert!(p.existing_id().is_none());
        p.id = Some("  ".to_string());
        assert!(p.existing_id().is_none());
        p.id = Some("abc".to_string());
        assert_eq!(p.existing_id(), Some("abc"));
    }

    #[test]
    fn test_blank_copy_source_is_none() {
        let mut p = base_param();
        p.copy_game_code = Some(String::new());
        assert!(p.copy_source().is_none());
        p.copy_game_code = Some("jsk3".to_string());
        assert_eq!(p.copy_source(), Some("jsk3"));
    }
}
