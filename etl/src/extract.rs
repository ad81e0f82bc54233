//! Exchange candle extraction.

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;
use shared::logging::log_response;

use crate::error::Result;

/// One day, in seconds.
pub const DAILY_GRANULARITY: u32 = 86_400;

const USER_AGENT: &str = concat!("crypto-market-etl/", env!("CARGO_PKG_VERSION"));

/// Raw exchange reply, handed back whatever the status so the caller can decide.
#[derive(Debug, Clone)]
pub struct ExchangeResponse {
    pub status: StatusCode,
    pub source: String,
    pub body: Value,
}

impl ExchangeResponse {
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

#[derive(Debug, Clone)]
pub struct ExchangeClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn candles_url(&self, ticker: &str) -> String {
        format!("{}/products/{}/candles", self.base_url, ticker)
    }

    /// GET daily candles for `ticker` between `start` and `end`.
    pub async fn fetch_historical(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ExchangeResponse> {
        let url = self.candles_url(ticker);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("start", start.to_string()),
                ("end", end.to_string()),
                ("granularity", DAILY_GRANULARITY.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        log_response(status.as_u16(), &url, &body);

        Ok(ExchangeResponse {
            status,
            source: url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candles_url_strips_trailing_slash() {
        let client = ExchangeClient::new("https://api.exchange.coinbase.com/").unwrap();
        assert_eq!(
            client.candles_url("BTC-USD"),
            "https://api.exchange.coinbase.com/products/BTC-USD/candles"
        );
    }
}
