//! Tabular view over historical rows, with a derived percent-change column.
//!
//! Columns are fixed: `date, ticker_id, low, high, open, close, volume`, plus
//! `% change` once [`HistoricalFrame::add_pct_change`] has run.

use anyhow::{anyhow, Result};
use serde::Serialize;
use shared::{CandleStickRecord, HistoricalRecord, PostHistoricalDataRequest};

pub const PCT_CHANGE_COLUMN: &str = "% change";

pub const BASE_COLUMNS: [&str; 7] = ["date", "ticker_id", "low", "high", "open", "close", "volume"];

/// Numeric columns a percent change can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceColumn {
    Low,
    High,
    Open,
    Close,
    Volume,
}

impl PriceColumn {
    fn value(&self, record: &HistoricalRecord) -> f64 {
        match self {
            PriceColumn::Low => record.low,
            PriceColumn::High => record.high,
            PriceColumn::Open => record.open,
            PriceColumn::Close => record.close,
            PriceColumn::Volume => record.volume,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoricalFrame {
    rows: Vec<HistoricalRecord>,
    pct_change: Option<Vec<f64>>,
}

/// One output row; `% change` is omitted until it has been computed.
#[derive(Debug, Serialize)]
pub struct FrameRow<'a> {
    #[serde(flatten)]
    record: &'a HistoricalRecord,
    #[serde(rename = "% change", skip_serializing_if = "Option::is_none")]
    pct_change: Option<f64>,
}

impl HistoricalFrame {
    pub fn from_records<I, R>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<HistoricalRecord>,
    {
        Self {
            rows: records.into_iter().map(Into::into).collect(),
            pct_change: None,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = BASE_COLUMNS.to_vec();
        if self.pct_change.is_some() {
            columns.push(PCT_CHANGE_COLUMN);
        }
        columns
    }

    /// Append `% change` = (x[i] - x[i-1]) / x[i-1] * 100 over `column`.
    /// The first row and any non-finite result become 0.0.
    pub fn add_pct_change(&mut self, column: PriceColumn) {
        let values: Vec<f64> = self.rows.iter().map(|row| column.value(row)).collect();
        self.pct_change = Some(pct_change(&values));
    }

    pub fn to_rows(&self) -> Vec<FrameRow<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, record)| FrameRow {
                record,
                pct_change: self.pct_change.as_ref().map(|changes| changes[i]),
            })
            .collect()
    }

    /// CSV with a leading unnamed index column.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec![""];
        header.extend(self.columns());
        writer.write_record(&header)?;

        for (i, row) in self.to_rows().iter().enumerate() {
            let record = row.record;
            let mut fields = vec![
                i.to_string(),
                record.date.to_string(),
                record.ticker_id.to_string(),
                format_float(record.low),
                format_float(record.high),
                format_float(record.open),
                format_float(record.close),
                format_float(record.volume),
            ];
            if let Some(change) = row.pct_change {
                fields.push(format_float(change));
            }
            writer.write_record(&fields)?;
        }

        let bytes = writer.into_inner().map_err(|e| anyhow!(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut changes = Vec::with_capacity(values.len());
    for (i, current) in values.iter().enumerate() {
        let change = match i.checked_sub(1).map(|prev| values[prev]) {
            Some(previous) => (current - previous) / previous * 100.0,
            None => 0.0,
        };
        changes.push(if change.is_finite() { change } else { 0.0 });
    }
    changes
}

// Always keep a decimal point so integral prices read as floats ("32000.0").
fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Map inbound candles to storable rows for `ticker_id`, keeping input order.
pub fn to_historical_records(
    ticker_id: i32,
    request: &PostHistoricalDataRequest,
) -> Vec<HistoricalRecord> {
    request
        .candlestick_records
        .iter()
        .map(|candle: &CandleStickRecord| HistoricalRecord::from_candle(ticker_id, candle))
        .collect()
}
