//! `SeaORM` Entity for germinations table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "germinations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub germination_id: i32,
    pub seed_id: i32,
    pub planted_date: Date,
    pub germination_date: Option<Date>,
    pub seeds_attempted: i32,
    pub seeds_successful: i32,
    pub method: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seeds::Entity",
        from = "Column::SeedId",
        to = "super::seeds::Column::SeedId"
    )]
    Seeds,
    #[sea_orm(has_many = "super::plants::Entity")]
    Plants,
}

impl Related<super::seeds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seeds.def()
    }
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
