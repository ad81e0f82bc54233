use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::prelude::*;
use sea_orm::{QueryOrder, TransactionTrait};
use std::sync::Arc;
use shared::entity::historical;
use shared::HistoricalRecord;

// Keeps 7 bound columns per row well under SQLite's parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

#[derive(Clone)]
pub struct HistoricalRepository {
    db: Arc<DatabaseConnection>,
}

impl HistoricalRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Rows for `ticker_id` with `start <= date <= end`, oldest first.
    pub async fn find_by_date_range(
        &self,
        ticker_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<historical::Model>> {
        let rows = historical::Entity::find()
            .filter(historical::Column::TickerId.eq(ticker_id))
            .filter(historical::Column::Date.gte(start))
            .filter(historical::Column::Date.lte(end))
            .order_by_asc(historical::Column::Date)
            .order_by_asc(historical::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(rows)
    }

    /// Insert the whole batch in one transaction. Returns the number of rows written.
    pub async fn insert_many(&self, records: Vec<HistoricalRecord>) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let total = records.len() as u64;
        let txn = self.db.begin().await?;
        for chunk in records.chunks(INSERT_CHUNK_SIZE) {
            let models: Vec<historical::ActiveModel> =
                chunk.iter().cloned().map(Into::into).collect();
            historical::Entity::insert_many(models).exec(&txn).await?;
        }
        txn.commit().await?;
        Ok(total)
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let result = historical::Entity::delete_many()
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = historical::Entity::find()
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
