use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HydroponicSystems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HydroponicSystems::SystemId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HydroponicSystems::SystemType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HydroponicSystems::Comments).text())
                    .to_owned(),
            )
            .await?;

        // seeds.yield_id arrives in a later migration; with it the seed ->
        // yield -> plant -> germination -> seed reference chain closes into
        // a cycle, so the column cannot be part of the initial creation.
        manager
            .create_table(
                Table::create()
                    .table(Seeds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Seeds::SeedId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Seeds::Species).string().not_null())
                    .col(ColumnDef::new(Seeds::Variety).string().not_null())
                    .col(ColumnDef::new(Seeds::NumberOfSeeds).integer().not_null())
                    .col(ColumnDef::new(Seeds::Heirloom).boolean())
                    .col(ColumnDef::new(Seeds::Comments).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Germinations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Germinations::GerminationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Germinations::SeedId).integer().not_null())
                    .col(ColumnDef::new(Germinations::PlantedDate).date().not_null())
                    .col(ColumnDef::new(Germinations::GerminationDate).date())
                    .col(
                        ColumnDef::new(Germinations::SeedsAttempted)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Germinations::SeedsSuccessful)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Germinations::Method).string().not_null())
                    .col(ColumnDef::new(Germinations::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_germinations_seed_id")
                            .from(Germinations::Table, Germinations::SeedId)
                            .to(Seeds::Table, Seeds::SeedId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Plants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Plants::PlantId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Plants::GerminationId).integer().not_null())
                    .col(ColumnDef::new(Plants::HydroponicSystemId).integer())
                    .col(ColumnDef::new(Plants::PlantedDate).date())
                    .col(ColumnDef::new(Plants::DeathDate).date())
                    .col(ColumnDef::new(Plants::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plants_germination_id")
                            .from(Plants::Table, Plants::GerminationId)
                            .to(Germinations::Table, Germinations::GerminationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plants_hydroponic_system_id")
                            .from(Plants::Table, Plants::HydroponicSystemId)
                            .to(HydroponicSystems::Table, HydroponicSystems::SystemId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HydroponicConditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HydroponicConditions::ConditionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HydroponicConditions::SystemId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HydroponicConditions::Date).date().not_null())
                    .col(
                        ColumnDef::new(HydroponicConditions::WaterPh)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HydroponicConditions::ElectricalConductivity)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HydroponicConditions::WaterTemperatureF)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HydroponicConditions::Tds).double())
                    .col(ColumnDef::new(HydroponicConditions::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hydroponic_conditions_system_id")
                            .from(HydroponicConditions::Table, HydroponicConditions::SystemId)
                            .to(HydroponicSystems::Table, HydroponicSystems::SystemId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlantCrosses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlantCrosses::CrossId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlantCrosses::CrossDate).date().not_null())
                    .col(
                        ColumnDef::new(PlantCrosses::PollinationMethod)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlantCrosses::Comments).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlantPlantCrosses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlantPlantCrosses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlantPlantCrosses::PlantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlantPlantCrosses::CrossId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlantPlantCrosses::Role).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_plant_crosses_plant_id")
                            .from(PlantPlantCrosses::Table, PlantPlantCrosses::PlantId)
                            .to(Plants::Table, Plants::PlantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_plant_plant_crosses_cross_id")
                            .from(PlantPlantCrosses::Table, PlantPlantCrosses::CrossId)
                            .to(PlantCrosses::Table, PlantCrosses::CrossId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Yields::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Yields::YieldId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Yields::PlantId).integer().not_null())
                    .col(ColumnDef::new(Yields::CrossId).integer())
                    .col(ColumnDef::new(Yields::Date).date().not_null())
                    .col(ColumnDef::new(Yields::Color).string().not_null())
                    .col(ColumnDef::new(Yields::Texture).string().not_null())
                    .col(ColumnDef::new(Yields::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_yields_plant_id")
                            .from(Yields::Table, Yields::PlantId)
                            .to(Plants::Table, Plants::PlantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_yields_cross_id")
                            .from(Yields::Table, Yields::CrossId)
                            .to(PlantCrosses::Table, PlantCrosses::CrossId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TasteTests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TasteTests::TasteTestId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TasteTests::PlantId).integer().not_null())
                    .col(ColumnDef::new(TasteTests::Date).date().not_null())
                    .col(ColumnDef::new(TasteTests::Taste).string().not_null())
                    .col(ColumnDef::new(TasteTests::Texture).string().not_null())
                    .col(ColumnDef::new(TasteTests::Appearance).string().not_null())
                    .col(ColumnDef::new(TasteTests::Overall).integer().not_null())
                    .col(ColumnDef::new(TasteTests::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_taste_tests_plant_id")
                            .from(TasteTests::Table, TasteTests::PlantId)
                            .to(Plants::Table, Plants::PlantId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Observations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Observations::ObservationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Observations::PlantId).integer().not_null())
                    .col(ColumnDef::new(Observations::Date).date().not_null())
                    .col(ColumnDef::new(Observations::HeightCm).double())
                    .col(ColumnDef::new(Observations::LeafCount).integer())
                    .col(ColumnDef::new(Observations::Color).string())
                    .col(ColumnDef::new(Observations::Texture).string())
                    .col(ColumnDef::new(Observations::Comments).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_observations_plant_id")
                            .from(Observations::Table, Observations::PlantId)
                            .to(Plants::Table, Plants::PlantId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Observations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TasteTests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Yields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlantPlantCrosses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlantCrosses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HydroponicConditions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Plants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Germinations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Seeds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HydroponicSystems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Seeds {
    Table,
    SeedId,
    Species,
    Variety,
    NumberOfSeeds,
    Heirloom,
    Comments,
}

#[derive(DeriveIden)]
enum Germinations {
    Table,
    GerminationId,
    SeedId,
    PlantedDate,
    GerminationDate,
    SeedsAttempted,
    SeedsSuccessful,
    Method,
    Comments,
}

#[derive(DeriveIden)]
enum Plants {
    Table,
    PlantId,
    GerminationId,
    HydroponicSystemId,
    PlantedDate,
    DeathDate,
    Comments,
}

#[derive(DeriveIden)]
enum HydroponicSystems {
    Table,
    SystemId,
    SystemType,
    Comments,
}

#[derive(DeriveIden)]
enum HydroponicConditions {
    Table,
    ConditionId,
    SystemId,
    Date,
    WaterPh,
    ElectricalConductivity,
    WaterTemperatureF,
    Tds,
    Comments,
}

#[derive(DeriveIden)]
enum PlantCrosses {
    Table,
    CrossId,
    CrossDate,
    PollinationMethod,
    Comments,
}

#[derive(DeriveIden)]
enum PlantPlantCrosses {
    Table,
    Id,
    PlantId,
    CrossId,
    Role,
}

#[derive(DeriveIden)]
enum Yields {
    Table,
    YieldId,
    PlantId,
    CrossId,
    Date,
    Color,
    Texture,
    Notes,
}

#[derive(DeriveIden)]
enum TasteTests {
    Table,
    TasteTestId,
    PlantId,
    Date,
    Taste,
    Texture,
    Appearance,
    Overall,
    Comments,
}

#[derive(DeriveIden)]
enum Observations {
    Table,
    ObservationId,
    PlantId,
    Date,
    HeightCm,
    LeafCount,
    Color,
    Texture,
    Comments,
}
