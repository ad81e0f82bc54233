//! Forward transformed candles to the market data API.

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde_json::{json, Value};
use shared::logging::log_response;
use shared::{CandleStickRecord, DataFormat, API_HISTORICAL_ENDPOINT, API_TICKERS_ENDPOINT};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn post_ticker(&self, ticker: &str) -> Result<StatusCode> {
        let url = self.url(API_TICKERS_ENDPOINT);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "ticker_name": ticker }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        log_response(status.as_u16(), &url, &body);
        Ok(status)
    }

    pub async fn post_historical(
        &self,
        ticker: &str,
        records: &[CandleStickRecord],
    ) -> Result<StatusCode> {
        let url = self.url(API_HISTORICAL_ENDPOINT);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "ticker_name": ticker, "candlestick_records": records }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        log_response(status.as_u16(), &url, &body);
        Ok(status)
    }

    /// Fetch history back. CSV bodies are logged as text, never decoded as JSON.
    pub async fn get_historical(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        format: DataFormat,
    ) -> Result<StatusCode> {
        let url = self.url(API_HISTORICAL_ENDPOINT);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("ticker_name", ticker.to_string()),
                ("start", start.to_string()),
                ("end", end.to_string()),
                ("data_format", format.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if format == DataFormat::Json || status != StatusCode::OK {
            let body: Value = serde_json::from_str(&text)?;
            log_response(status.as_u16(), &url, &body);
        } else {
            log_response(status.as_u16(), &url, &text);
        }
        Ok(status)
    }
}
