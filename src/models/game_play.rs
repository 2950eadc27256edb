use chrono::{DateTime, Utc};
use sea_orm::{IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::game_play_entity as game_plays;
use crate::error::{AppError, AppResult};
use crate::models::{NumLocateParam, NumLocateVO};
use crate::utils::{generate_id, validate_code};

/// 玩法列表查询参数
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GamePlayQuery {
    /// 所属游戏代码
    pub game_code: String,
}

/// 修改玩法状态请求
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateGamePlayStateRequest {
    /// 目标状态
    pub state: String,
}

/// 玩法新增/修改参数
/// id 为空表示新增; num_locates 非空时保存玩法后写入号码位置规则,
/// 修改时旧规则整组删除后重建
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GamePlayParam {
    /// 内部ID (为空表示新增)
    pub id: Option<String>,
    /// 所属游戏代码
    pub game_code: String,
    /// 玩法代码 (同一游戏内唯一)
    pub game_play_code: String,
    /// 玩法名称
    pub game_play_name: String,
    /// 排序号
    pub order_no: Option<i32>,
    /// 状态 ("1"=启用, "0"=禁用)
    pub state: String,
    /// 玩法说明
    pub remarks: Option<String>,
    /// 号码位置规则
    pub num_locates: Option<Vec<NumLocateParam>>,
}

impl GamePlayParam {
    /// 参数校验 (必填项与格式, 含嵌套的号码位置规则)
    pub fn validate(&self) -> AppResult<()> {
        if self.game_code.trim().is_empty() {
            return Err(AppError::ValidationError("game_code is required".into()));
        }
        validate_code("game_code", self.game_code.trim())?;
        if self.game_play_code.trim().is_empty() {
            return Err(AppError::ValidationError(
                "game_play_code is required".into(),
            ));
        }
        validate_code("game_play_code", self.game_play_code.trim())?;
        if self.game_play_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "game_play_name is required".into(),
            ));
        }
        if self.state.trim().is_empty() {
            return Err(AppError::ValidationError("state is required".into()));
        }
        if let Some(num_locates) = &self.num_locates {
            for num_locate in num_locates {
                num_locate.validate()?;
            }
        }
        Ok(())
    }

    /// 取有效ID (空白等同于未提供)
    pub fn existing_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// 构造新实体 (生成新ID)
    pub fn to_new_active_model(&self) -> game_plays::ActiveModel {
        game_plays::ActiveModel {
            id: Set(generate_id()),
            game_code: Set(self.game_code.trim().to_string()),
            game_play_code: Set(self.game_play_code.trim().to_string()),
            game_play_name: Set(self.game_play_name.clone()),
            order_no: Set(self.order_no),
            state: Set(self.state.clone()),
            remarks: Set(self.remarks.clone()),
            created_at: Set(Some(Utc::now())),
            updated_at: Set(None),
        }
    }

    /// 将参数字段逐项覆盖到已有实体
    pub fn apply_to(&self, model: game_plays::Model) -> game_plays::ActiveModel {
        let mut am = model.into_active_model();
        am.game_code = Set(self.game_code.trim().to_string());
        am.game_play_code = Set(self.game_play_code.trim().to_string());
        am.game_play_name = Set(self.game_play_name.clone());
        am.order_no = Set(self.order_no);
        am.state = Set(self.state.clone());
        am.remarks = Set(self.remarks.clone());
        am.updated_at = Set(Some(Utc::now()));
        am
    }
}

/// 玩法视图
/// num_locates 仅在明细/含规则查询时填充
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GamePlayVO {
    /// 内部ID
    pub id: String,
    /// 所属游戏代码
    pub game_code: String,
    /// 玩法代码
    pub game_play_code: String,
    /// 玩法名称
    pub game_play_name: String,
    /// 排序号
    pub order_no: Option<i32>,
    /// 状态
    pub state: String,
    /// 玩法说明
    pub remarks: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// 号码位置规则 (列表查询不带)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_locates: Option<Vec<NumLocateVO>>,
}

impl From<game_plays::Model> for GamePlayVO {
    fn from(m: game_plays::Model) -> Self {
        GamePlayVO {
            id: m.id,
            game_code: m.game_code,
            game_play_code: m.game_play_code,
            game_play_name: m.game_play_name,
            order_no: m.order_no,
            state: m.state,
            remarks: m.remarks,
            created_at: m.created_at,
            updated_at: m.updated_at,
            num_locates: None,
        }
    }
}
