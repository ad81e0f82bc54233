pub mod clear;
pub mod historical;
pub mod tickers;

use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use shared::{API_CLEAR_ENDPOINT, API_HISTORICAL_ENDPOINT, API_TICKERS_ENDPOINT};

use crate::error::ApiError;
use crate::state::AppState;

/// Assemble the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route(
            API_TICKERS_ENDPOINT,
            get(tickers::get_ticker).post(tickers::add_ticker),
        )
        .route(
            API_HISTORICAL_ENDPOINT,
            get(historical::get_historical).post(historical::add_historical),
        )
        .route(API_CLEAR_ENDPOINT, delete(clear::clear_all))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Render a payload as compact JSON for the success log.
fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Internal(e.into()))
}
