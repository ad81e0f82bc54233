use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}

pub type Result<T> = std::result::Result<T, EtlError>;
