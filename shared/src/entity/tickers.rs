//! `SeaORM` Entity, @generated manually

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub ticker: String, // e.g. "BTC-USD"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::historical::Entity")]
    Historical,
}

impl Related<super::historical::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Historical.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
