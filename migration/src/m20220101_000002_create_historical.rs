use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Historical::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Historical::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Historical::Date).date().not_null())
                    .col(ColumnDef::new(Historical::TickerId).integer().not_null())
                    .col(ColumnDef::new(Historical::Low).double().not_null())
                    .col(ColumnDef::new(Historical::High).double().not_null())
                    .col(ColumnDef::new(Historical::Open).double().not_null())
                    .col(ColumnDef::new(Historical::Close).double().not_null())
                    .col(ColumnDef::new(Historical::Volume).double().not_null())
                    // No cascade: clearing removes historical rows before tickers
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_historical_ticker")
                            .from(Historical::Table, Historical::TickerId)
                            .to(Tickers::Table, Tickers::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_historical_date")
                    .table(Historical::Table)
                    .col(Historical::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_historical_ticker_id")
                    .table(Historical::Table)
                    .col(Historical::TickerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Historical::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Historical {
    Table,
    Id,
    Date,
    TickerId,
    Low,
    High,
    Open,
    Close,
    Volume,
}

#[derive(DeriveIden)]
enum Tickers {
    Table,
    Id,
}
