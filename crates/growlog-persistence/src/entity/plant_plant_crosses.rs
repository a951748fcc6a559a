//! `SeaORM` Entity for plant_plant_crosses join table
//!
//! Associates a plant with a cross it took part in, with the role the
//! plant played (`male` or `female` parent).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plant_plant_crosses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plant_id: i32,
    pub cross_id: i32,
    pub role: String,
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

impl ActiveModelBehavior for ActiveModel {}
