use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // Records which yield a packet of saved seeds was harvested from. The
    // column closes a reference cycle (seeds -> yields -> plants ->
    // germinations -> seeds), so no database-level constraint is declared;
    // the store checks the reference on delete instead.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Seeds::Table)
                    .add_column(ColumnDef::new(Seeds::YieldId).integer())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Seeds::Table)
                    .drop_column(Seeds::YieldId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Seeds {
    Table,
    YieldId,
}
