use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 游戏状态 - 启用
pub const STATE_OPEN: &str = "1";
/// 游戏状态 - 禁用
pub const STATE_CLOSED: &str = "0";

/// 游戏(彩种)实体
/// 概念说明:
/// - game_code: 业务代码 (全局唯一), 玩法通过该代码关联到所属游戏
/// - order_no: 列表排序号 (升序展示)
/// - state: 状态 ("1"=启用, "0"=禁用), 存储为字符串, 不做枚举约束
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// 游戏代码 (全局唯一)
    #[sea_orm(unique)]
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

impl Model {
    /// 是否处于启用状态
    pub fn is_open(&self) -> bool {
        self.state == STATE_OPEN
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
