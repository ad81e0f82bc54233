pub mod historical_repository;
pub mod ticker_repository;

pub use historical_repository::HistoricalRepository;
pub use ticker_repository::TickerRepository;
