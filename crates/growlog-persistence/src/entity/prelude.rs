pub use super::germinations::Entity as Germinations;
pub use super::hydroponic_conditions::Entity as HydroponicConditions;
pub use super::hydroponic_systems::Entity as HydroponicSystems;
pub use super::observations::Entity as Observations;
pub use super::plant_crosses::Entity as PlantCrosses;
pub use super::plant_plant_crosses::Entity as PlantPlantCrosses;
pub use super::plants::Entity as Plants;
pub use super::seeds::Entity as Seeds;
pub use super::taste_tests::Entity as TasteTests;
pub use super::yields::Entity as Yields;
