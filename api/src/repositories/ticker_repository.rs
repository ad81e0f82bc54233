use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::SqlErr;
use std::sync::Arc;
use shared::entity::tickers;

#[derive(Clone)]
pub struct TickerRepository {
    db: Arc<DatabaseConnection>,
}

impl TickerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Exact, case-sensitive lookup by symbol.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<tickers::Model>> {
        let ticker = tickers::Entity::find()
            .filter(tickers::Column::Ticker.eq(name))
            .one(self.db.as_ref())
            .await?;
        Ok(ticker)
    }

    /// Insert a new ticker. `None` when the symbol is already taken, including
    /// when a concurrent insert wins the unique constraint.
    pub async fn create(&self, name: &str) -> Result<Option<tickers::Model>> {
        let active_model = tickers::ActiveModel {
            ticker: Set(name.to_owned()),
            ..Default::default()
        };
        match active_model.insert(self.db.as_ref()).await {
            Ok(ticker) => Ok(Some(ticker)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = tickers::Entity::delete_many()
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = tickers::Entity::find()
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
