//! `SeaORM` entities for the breeding record tables

pub mod prelude;

pub mod germinations;
pub mod hydroponic_conditions;
pub mod hydroponic_systems;
pub mod observations;
pub mod plant_crosses;
pub mod plant_plant_crosses;
pub mod plants;
pub mod seeds;
pub mod taste_tests;
pub mod yields;
