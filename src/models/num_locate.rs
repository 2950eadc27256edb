use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::num_locate_entity as num_locates;
use crate::error::{AppError, AppResult};
use crate::utils::generate_id;

/// 号码位置规则参数 (随玩法一起提交, 保存时整组替换)
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NumLocateParam {
    /// 位置名称
    pub locate_name: String,
    /// 位置序号
    pub position_no: Option<i32>,
    /// 备注
    pub remarks: Option<String>,
}

impl NumLocateParam {
    pub fn validate(&self) -> AppResult<()> {
        if self.locate_name.trim().is_empty() {
            return Err(AppError::ValidationError("locate_name is required".into()));
        }
        Ok(())
    }

    /// 构造新实体 (生成新ID, 归属到指定玩法)
    pub fn to_new_active_model(&self, game_play_id: &str) -> num_locates::ActiveModel {
        num_locates::ActiveModel {
            id: Set(generate_id()),
            game_play_id: Set(game_play_id.to_string()),
            locate_name: Set(self.locate_name.clone()),
            position_no: Set(self.position_no),
            remarks: Set(self.remarks.clone()),
        }
    }
}

/// 号码位置规则视图
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NumLocateVO {
    /// 内部ID
    pub id: String,
    /// 所属玩法ID
    pub game_play_id: String,
    /// 位置名称
    pub locate_name: String,
    /// 位置序号
    pub position_no: Option<i32>,
    /// 备注
    pub remarks: Option<String>,
}

impl From<num_locates::Model> for NumLocateVO {
    fn from(m: num_locates::Model) -> Self {
        NumLocateVO {
            id: m.id,
            game_play_id: m.game_play_id,
            locate_name: m.locate_name,
            position_no: m.position_no,
            remarks: m.remarks,
        }
    }
}
