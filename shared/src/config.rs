use anyhow::Context;
use chrono::NaiveDate;
use dotenv::dotenv;

pub const API_TICKERS_ENDPOINT: &str = "/tickers";
pub const API_HISTORICAL_ENDPOINT: &str = "/historical";
pub const API_CLEAR_ENDPOINT: &str = "/clear";

pub struct Config {
    pub database_url: String,
    pub api_bind_addr: String,
    pub api_base_url: String,
    pub exchange_base_url: String,
    pub etl: EtlConfig,
}

/// Ticker and date window pulled by a single ETL run.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            ticker: "BTC-USD".to_string(),
            start: NaiveDate::from_ymd_opt(2021, 9, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2021, 10, 31).unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        let defaults = EtlConfig::default();

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://crypto_market.db?mode=rwc".to_string()),
            api_bind_addr: std::env::var("API_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            api_base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            exchange_base_url: std::env::var("EXCHANGE_BASE_URL")
                .unwrap_or_else(|_| "https://api.exchange.coinbase.com".to_string()),
            etl: EtlConfig {
                ticker: std::env::var("ETL_TICKER").unwrap_or(defaults.ticker),
                start: env_date("ETL_START", defaults.start)?,
                end: env_date("ETL_END", defaults.end)?,
            },
        })
    }
}

fn env_date(name: &str, default: NaiveDate) -> Result<NaiveDate, anyhow::Error> {
    match std::env::var(name) {
        Ok(raw) => parse_date(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_date(name: &str, raw: &str) -> Result<NaiveDate, anyhow::Error> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("{name} must be an ISO date (YYYY-MM-DD), got {raw:?}"))
}
