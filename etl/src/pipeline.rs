use shared::{DataFormat, EtlConfig};
use tracing::{info, warn};

use crate::error::Result;
use crate::extract::ExchangeClient;
use crate::load::ApiClient;
use crate::transform::{normalize_rows, parse_candles};

/// Outcome of one run, mostly for callers that want to report on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The exchange did not answer 200; nothing was loaded.
    Skipped,
    Loaded { records: usize },
}

/// Extract one window from the exchange, load it into the API, then read it back as JSON and CSV.
pub async fn run(exchange: &ExchangeClient, api: &ApiClient, job: &EtlConfig) -> Result<RunOutcome> {
    let response = exchange
        .fetch_historical(&job.ticker, job.start, job.end)
        .await?;

    if !response.is_success() {
        warn!(
            "Skipping load for {}: exchange answered {}",
            job.ticker, response.status
        );
        return Ok(RunOutcome::Skipped);
    }

    let records = normalize_rows(parse_candles(&response.body)?)?;
    info!("Extracted {} {} candles", records.len(), job.ticker);

    api.post_ticker(&job.ticker).await?;
    api.post_historical(&job.ticker, &records).await?;

    api.get_historical(&job.ticker, job.start, job.end, DataFormat::Json)
        .await?;
    api.get_historical(&job.ticker, job.start, job.end, DataFormat::Csv)
        .await?;

    Ok(RunOutcome::Loaded {
        records: records.len(),
    })
}
