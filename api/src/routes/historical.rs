use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::{
    AddHistoricalResponse, DataFormat, GetHistoricalQuery, PostHistoricalDataRequest,
    API_HISTORICAL_ENDPOINT,
};
use shared::logging::log_response;

use super::to_json;
use crate::error::ApiError;
use crate::frame::{to_historical_records, HistoricalFrame, PriceColumn};
use crate::state::AppState;

pub async fn get_historical(
    State(state): State<AppState>,
    query: Result<Query<GetHistoricalQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(q) = query?;
    let ticker = state
        .tickers
        .find_by_name(&q.ticker_name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Ticker {} does not exist.", q.ticker_name)))?;

    let rows = state
        .historical
        .find_by_date_range(ticker.id, q.start, q.end)
        .await?;
    let mut frame = HistoricalFrame::from_records(rows);
    frame.add_pct_change(PriceColumn::Close);

    if frame.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No {} records found for the following date range: {} - {}",
            q.ticker_name, q.start, q.end
        )));
    }

    log_response(
        200,
        API_HISTORICAL_ENDPOINT,
        format!(
            "Successfully retrieved {} {} records as {} for the following date range: {} - {}",
            frame.len(),
            q.ticker_name,
            q.data_format,
            q.start,
            q.end
        ),
    );

    let response = match q.data_format {
        DataFormat::Json => Json(frame.to_rows()).into_response(),
        DataFormat::Csv => (
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            frame.to_csv()?,
        )
            .into_response(),
    };
    Ok(response)
}

pub async fn add_historical(
    State(state): State<AppState>,
    body: Result<Json<PostHistoricalDataRequest>, JsonRejection>,
) -> Result<Json<AddHistoricalResponse>, ApiError> {
    let Json(request) = body?;
    let ticker = state
        .tickers
        .find_by_name(&request.ticker_name)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Ticker {} does not exist - the historical data could not be added.",
                request.ticker_name
            ))
        })?;

    let records = to_historical_records(ticker.id, &request);
    let added = state.historical.insert_many(records.clone()).await?;

    let response = AddHistoricalResponse {
        ticker_name: request.ticker_name,
        added_records: records,
    };
    log_response(
        200,
        API_HISTORICAL_ENDPOINT,
        format!(
            "Successfully added {added} {} records: {}",
            response.ticker_name,
            to_json(&response.added_records)?
        ),
    );
    Ok(Json(response))
}
