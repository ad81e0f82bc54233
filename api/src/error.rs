use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shared::logging::log_response;
use thiserror::Error;

/// Error type for API responses. The body is always `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// Malformed query string or body, with the extractor's own status.
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Attached to error responses so [`log_errors`] can log them with their path.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate tickers are reported as a bad request.
            Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (detail, logged) = match &self {
            Self::Internal(e) => ("internal server error".to_string(), format!("{e:#}")),
            other => (other.to_string(), other.to_string()),
        };

        let mut response = (status, axum::Json(json!({ "detail": detail }))).into_response();
        response.extensions_mut().insert(ErrorDetail(logged));
        response
    }
}

/// Log every error response with the request path it answered.
pub async fn log_errors(request: Request, next: Next) -> Response {
    let source = request.uri().path().to_owned();
    let response = next.run(request).await;
    if let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>() {
        log_response(response.status().as_u16(), &source, detail);
    }
    response
}
