//! `SeaORM` Entity for seeds table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seeds")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seed_id: i32,
    pub species: String,
    pub variety: String,
    pub number_of_seeds: i32,
    pub heirloom: Option<bool>,
    pub yield_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::yields::Entity",
        from = "Column::YieldId",
        to = "super::yields::Column::YieldId"
    )]
    Yields,
    #[sea_orm(has_many = "super::germinations::Entity")]
    Germinations,
}

impl Related<super::yields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Yields.def()
    }
}

impl Related<super::germinations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Germinations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
