//! `SeaORM` Entity for hydroponic_systems table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hydroponic_systems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub system_id: i32,
    pub system_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plants::Entity")]
    Plants,
    #[sea_orm(has_many = "super::hydroponic_conditions::Entity")]
    HydroponicConditions,
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plants.def()
    }
}

impl Related<super::hydroponic_conditions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HydroponicConditions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
