use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 号码位置规则实体 (投注位的校验/渲染规则)
/// 通过 game_play_id 关联所属玩法; 玩法更新时整组替换, 不做局部合并
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "num_locates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// 所属玩法ID
    pub game_play_id: String,
    /// 位置名称 (如 "万位")
    pub locate_name: String,
    /// 位置序号
    pub position_no: Option<i32>,
    /// 备注
    pub remarks: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
