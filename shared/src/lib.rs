pub mod config;
pub mod database;
pub mod entity;
pub mod logging;
pub mod models;

pub use config::{Config, EtlConfig, API_CLEAR_ENDPOINT, API_HISTORICAL_ENDPOINT, API_TICKERS_ENDPOINT};
pub use database::get_db_connection;
pub use models::*;
