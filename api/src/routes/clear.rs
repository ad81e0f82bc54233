use axum::extract::State;
use axum::Json;
use shared::{ClearResponse, API_CLEAR_ENDPOINT};
use shared::logging::log_response;

use crate::error::ApiError;
use crate::state::AppState;

/// Remove every historical row, then every ticker.
pub async fn clear_all(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
    let removed_historical_data_rows = state.historical.delete_all().await?;
    let removed_ticker_rows = state.tickers.delete_all().await?;

    log_response(
        200,
        API_CLEAR_ENDPOINT,
        format!(
            "Successfully removed {removed_ticker_rows} ticker rows and {removed_historical_data_rows} historical data rows."
        ),
    );
    Ok(Json(ClearResponse {
        removed_ticker_rows,
        removed_historical_data_rows,
    }))
}
