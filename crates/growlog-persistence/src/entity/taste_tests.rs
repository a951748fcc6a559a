//! `SeaORM` Entity for taste_tests table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "taste_tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub taste_test_id: i32,
    pub plant_id: i32,
    pub date: Date,
    pub taste: String,
    pub texture: String,
    pub appearance: String,
    pub overall: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plants::Entity",
        from = "Column::PlantId",
        to = "super::plants::Column::PlantId"
    )]
    Plants,
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
