//! Reshape exchange candles into date-sorted wire records.

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;
use serde_json::Value;
use shared::CandleStickRecord;

use crate::error::{EtlError, Result};

/// `[timestamp, low, high, open, close, volume]` as returned by the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawCandle(pub i64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl RawCandle {
    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

pub fn parse_candles(body: &Value) -> Result<Vec<RawCandle>> {
    Ok(Vec::<RawCandle>::deserialize(body)?)
}

/// Convert epoch seconds to local calendar dates and sort ascending by date.
pub fn normalize_rows(raw: Vec<RawCandle>) -> Result<Vec<CandleStickRecord>> {
    normalize_rows_in(raw, &Local)
}

pub fn normalize_rows_in<Tz: TimeZone>(
    raw: Vec<RawCandle>,
    tz: &Tz,
) -> Result<Vec<CandleStickRecord>> {
    let mut rows = raw
        .into_iter()
        .map(|candle| -> Result<CandleStickRecord> {
            let RawCandle(ts, low, high, open, close, volume) = candle;
            let date = DateTime::from_timestamp(ts, 0)
                .ok_or(EtlError::InvalidTimestamp(ts))?
                .with_timezone(tz)
                .date_naive();
            Ok(CandleStickRecord {
                date,
                low,
                high,
                open,
                close,
                volume,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by_key(|row| row.date);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, d).unwrap()
    }

    fn sample() -> Vec<RawCandle> {
        vec![
            RawCandle(1641340800, 10000.0, 10000.0, 10000.0, 10000.0, 25067.674768),
            RawCandle(1641427200, 20000.0, 20000.0, 20000.0, 20000.0, 20780.047850),
            RawCandle(1641513600, 30000.0, 30000.0, 30000.0, 30000.0, 26122.199907),
            RawCandle(1641600000, 60000.0, 60000.0, 60000.0, 60000.0, 15454.113151),
            RawCandle(1641686400, 30000.0, 30000.0, 30000.0, 30000.0, 11074.224982),
        ]
    }

    #[test]
    fn converts_timestamps_to_dates() {
        let rows = normalize_rows_in(sample(), &Utc).unwrap();
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(5), day(6), day(7), day(8), day(9)]);
        assert_eq!(rows[3].close, 60000.0);
        assert_eq!(rows[4].volume, 11074.224982);
    }

    #[test]
    fn sorts_newest_first_input() {
        let mut raw = sample();
        raw.reverse();
        let rows = normalize_rows_in(raw, &Utc).unwrap();
        assert_eq!(rows[0].date, day(5));
        assert_eq!(rows[0].close, 10000.0);
        assert_eq!(rows[4].date, day(9));
    }

    #[test]
    fn two_rows_out_of_order() {
        let raw = vec![
            RawCandle(1641427200, 2.0, 2.0, 2.0, 2.0, 2.0),
            RawCandle(1641340800, 1.0, 1.0, 1.0, 1.0, 1.0),
        ];
        let rows = normalize_rows_in(raw, &Utc).unwrap();
        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2022-01-05", "2022-01-06"]);
    }

    #[test]
    fn rejects_out_of_range_timestamp() {
        let raw = vec![RawCandle(i64::MAX, 1.0, 1.0, 1.0, 1.0, 1.0)];
        assert!(matches!(
            normalize_rows_in(raw, &Utc),
            Err(EtlError::InvalidTimestamp(i64::MAX))
        ));
    }

    #[test]
    fn parses_exchange_payload() {
        let body = json!([
            [1641427200, 41000.5, 43500.0, 43000.0, 41500.25, 12345.678],
            [1641340800, 42500, 47000, 46500, 43000, 20000]
        ]);
        let candles = parse_candles(&body).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp(), 1641427200);
        assert_eq!(candles[1], RawCandle(1641340800, 42500.0, 47000.0, 46500.0, 43000.0, 20000.0));
    }

    #[test]
    fn parse_rejects_error_body() {
        let body = json!({"message": "NotFound"});
        assert!(matches!(parse_candles(&body), Err(EtlError::Json(_))));
    }
}
