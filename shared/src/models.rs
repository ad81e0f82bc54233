use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::historical;

/// Output format accepted by the get-historical endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A daily OHLCV candle as exchanged over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleStickRecord {
    pub date: NaiveDate,
    pub low: f64,
    pub high: f64,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTickerRequest {
    pub ticker_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostHistoricalDataRequest {
    pub ticker_name: String,
    pub candlestick_records: Vec<CandleStickRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetTickerQuery {
    pub ticker_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHistoricalQuery {
    pub ticker_name: String,
    pub data_format: DataFormat,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A historical row without its surrogate id, in storage column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub ticker_id: i32,
    pub low: f64,
    pub high: f64,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
}

impl HistoricalRecord {
    pub fn from_candle(ticker_id: i32, candle: &CandleStickRecord) -> Self {
        Self {
            date: candle.date,
            ticker_id,
            low: candle.low,
            high: candle.high,
            open: candle.open,
            close: candle.close,
            volume: candle.volume,
        }
    }
}

impl From<historical::Model> for HistoricalRecord {
    fn from(model: historical::Model) -> Self {
        Self {
            date: model.date,
            ticker_id: model.ticker_id,
            low: model.low,
            high: model.high,
            open: model.open,
            close: model.close,
            volume: model.volume,
        }
    }
}

impl From<HistoricalRecord> for historical::ActiveModel {
    fn from(record: HistoricalRecord) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        historical::ActiveModel {
            id: NotSet,
            date: Set(record.date),
            ticker_id: Set(record.ticker_id),
            low: Set(record.low),
            high: Set(record.high),
            open: Set(record.open),
            close: Set(record.close),
            volume: Set(record.volume),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddHistoricalResponse {
    pub ticker_name: String,
    pub added_records: Vec<HistoricalRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResponse {
    pub removed_ticker_rows: u64,
    pub removed_historical_data_rows: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_format_parses_lowercase() {
        let format: DataFormat = serde_json::from_value(json!("csv")).unwrap();
        assert_eq!(format, DataFormat::Csv);
        assert!(serde_json::from_value::<DataFormat>(json!("xml")).is_err());
    }

    #[test]
    fn historical_request_accepts_integer_prices() {
        let request: PostHistoricalDataRequest = serde_json::from_value(json!({
            "ticker_name": "BTC-USD",
            "candlestick_records": [{
                "date": "2022-02-02",
                "low": 10000,
                "high": 20000,
                "open": 140000,
                "close": 18000,
                "volume": 2234444
            }]
        }))
        .unwrap();

        let candle = &request.candlestick_records[0];
        assert_eq!(candle.date, NaiveDate::from_ymd_opt(2022, 2, 2).unwrap());
        assert_eq!(candle.volume, 2234444.0);
    }

    #[test]
    fn historical_record_serializes_in_column_order() {
        let record = HistoricalRecord {
            date: NaiveDate::from_ymd_opt(2021, 10, 5).unwrap(),
            ticker_id: 1,
            low: 25000.0,
            high: 35000.0,
            open: 27500.0,
            close: 32000.0,
            volume: 5000.0,
        };
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"date":"2021-10-05","ticker_id":1,"low":25000.0,"high":35000.0,"open":27500.0,"close":32000.0,"volume":5000.0}"#
        );
    }
}
