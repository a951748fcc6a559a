//! `SeaORM` Entity for hydroponic_conditions table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hydroponic_conditions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub condition_id: i32,
    pub system_id: i32,
    pub date: Date,
    pub water_ph: f64,
    pub electrical_conductivity: f64,
    pub water_temperature_f: i32,
    pub tds: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hydroponic_systems::Entity",
        from = "Column::SystemId",
        to = "super::hydroponic_systems::Column::SystemId"
    )]
    HydroponicSystems,
}

impl Related<super::hydroponic_systems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HydroponicSystems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
