pub mod historical;
pub mod tickers;
