//! `SeaORM` Entity for plant_crosses table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plant_crosses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cross_id: i32,
    pub cross_date: Date,
    pub pollination_method: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plant_plant_crosses::Entity")]
    PlantPlantCrosses,
    #[sea_orm(has_many = "super::yields::Entity")]
    Yields,
}

impl Related<super::plant_plant_crosses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantPlantCrosses.def()
    }
}

impl Related<super::yields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Yields.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
