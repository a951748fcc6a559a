//! `SeaORM` Entity for plants table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub plant_id: i32,
    pub germination_id: i32,
    pub hydroponic_system_id: Option<i32>,
    pub planted_date: Option<Date>,
    pub death_date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::germinations::Entity",
        from = "Column::GerminationId",
        to = "super::germinations::Column::GerminationId"
    )]
    Germinations,
    #[sea_orm(
        belongs_to = "super::hydroponic_systems::Entity",
        from = "Column::HydroponicSystemId",
        to = "super::hydroponic_systems::Column::SystemId"
    )]
    HydroponicSystems,
    #[sea_orm(has_many = "super::plant_plant_crosses::Entity")]
    PlantPlantCrosses,
    #[sea_orm(has_many = "super::yields::Entity")]
    Yields,
    #[sea_orm(has_many = "super::taste_tests::Entity")]
    TasteTests,
    #[sea_orm(has_many = "super::observations::Entity")]
    Observations,
}

impl Related<super::germinations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Germinations.def()
    }
}

impl Related<super::hydroponic_systems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HydroponicSystems.def()
    }
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

impl Related<super::taste_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TasteTests.def()
    }
}

impl Related<super::observations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
