//! `SeaORM` Entity for yields table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "yields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub yield_id: i32,
    pub plant_id: i32,
    pub cross_id: Option<i32>,
    pub date: Date,
    pub color: String,
    pub texture: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plants::Entity",
        from = "Column::PlantId",
        to = "super::plants::Column::PlantId"
    )]
    Plants,
    #[sea_orm(
        belongs_to = "super::plant_crosses::Entity",
        from = "Column::CrossId",
        to = "super::plant_crosses::Column::CrossId"
    )]
    PlantCrosses,
    #[sea_orm(has_many = "super::seeds::Entity")]
    Seeds,
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plants.def()
    }
}

impl Related<super::plant_crosses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantCrosses.def()
    }
}

impl Related<super::seeds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seeds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
