//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One daily candle. `(ticker_id, date)` is not unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "historical")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub ticker_id: i32,
    #[sea_orm(column_type = "Double")]
    pub low: f64,
    #[sea_orm(column_type = "Double")]
    pub high: f64,
    #[sea_orm(column_type = "Double")]
    pub open: f64,
    #[sea_orm(column_type = "Double")]
    pub close: f64,
    #[sea_orm(column_type = "Double")]
    pub volume: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tickers::Entity",
        from = "Column::TickerId",
        to = "super::tickers::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Tickers,
}

impl Related<super::tickers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
