use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 游戏玩法实体
/// 通过 game_code (业务代码) 关联所属游戏, 而非内部ID
/// game_play_code 在同一 game_code 下唯一
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "game_plays")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
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
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
