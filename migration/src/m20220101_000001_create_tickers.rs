use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tickers::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Tickers::Ticker).string_len(64).not_null().unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tickers {
    Table,
    Id,
    Ticker,
}
