use std::fmt::Display;

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber. Call once from `main`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Log a request outcome: info on 200, error on anything else.
///
/// `source` is the URL or path the status belongs to, `data` the payload or reason.
pub fn log_response(status: u16, source: &str, data: impl Display) {
    let message = response_message(status, source, data);
    if status == 200 {
        tracing::info!(status, source, "{message}");
    } else {
        tracing::error!(status, source, "{message}");
    }
}

fn response_message(status: u16, source: &str, data: impl Display) -> String {
    format!("{status} response from {source}: \n{data}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_embeds_status_source_and_payload() {
        let message = response_message(404, "/tickers", "Ticker BTC-USD does not exist.");
        assert_eq!(message, "404 response from /tickers: \nTicker BTC-USD does not exist.");
    }
}
