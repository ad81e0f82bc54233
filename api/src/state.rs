use std::sync::Arc;
use sea_orm::DatabaseConnection;

use crate::repositories::{HistoricalRepository, TickerRepository};

/// Shared application state, handed to every handler through `State`.
/// Both repositories share one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub tickers: TickerRepository,
    pub historical: HistoricalRepository,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        Self {
            tickers: TickerRepository::new(db.clone()),
            historical: HistoricalRepository::new(db),
        }
    }
}
