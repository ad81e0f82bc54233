use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use shared::entity::tickers;
use shared::logging::log_response;
use shared::{GetTickerQuery, PostTickerRequest, API_TICKERS_ENDPOINT};

use super::to_json;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_ticker(
    State(state): State<AppState>,
    query: Result<Query<GetTickerQuery>, QueryRejection>,
) -> Result<Json<tickers::Model>, ApiError> {
    let Query(q) = query?;
    match state.tickers.find_by_name(&q.ticker_name).await? {
        Some(ticker) => {
            log_response(
                200,
                API_TICKERS_ENDPOINT,
                format!("Ticker record {} has been successfully retrieved.", to_json(&ticker)?),
            );
            Ok(Json(ticker))
        }
        None => Err(ApiError::NotFound(format!(
            "Ticker {} does not exist.",
            q.ticker_name
        ))),
    }
}

pub async fn add_ticker(
    State(state): State<AppState>,
    body: Result<Json<PostTickerRequest>, JsonRejection>,
) -> Result<Json<tickers::Model>, ApiError> {
    let Json(request) = body?;
    let already_exists = || ApiError::Conflict(format!("Ticker {} already exists.", request.ticker_name));

    if state.tickers.find_by_name(&request.ticker_name).await?.is_some() {
        return Err(already_exists());
    }

    let ticker = state
        .tickers
        .create(&request.ticker_name)
        .await?
        .ok_or_else(already_exists)?;
    log_response(
        200,
        API_TICKERS_ENDPOINT,
        format!("Ticker record {} has been successfully added.", to_json(&ticker)?),
    );
    Ok(Json(ticker))
}
