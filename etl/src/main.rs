use anyhow::Result;
use etl::{run, ApiClient, ExchangeClient, RunOutcome};
use shared::{logging, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = Config::from_env()?;
    info!(
        "Starting ETL for {} from {} to {}",
        config.etl.ticker, config.etl.start, config.etl.end
    );

    let exchange = ExchangeClient::new(config.exchange_base_url.clone())?;
    let api = ApiClient::new(config.api_base_url.clone());

    match run(&exchange, &api, &config.etl).await? {
        RunOutcome::Loaded { records } => info!("ETL finished, {} records loaded", records),
        RunOutcome::Skipped => info!("ETL finished without loading"),
    }

    Ok(())
}
