pub mod error;
pub mod frame;
pub mod repositories;
pub mod routes;
pub mod state;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use error::ApiError;
pub use state::AppState;

/// Build the full application: routes, tracing and CORS layers, bound to `state`.
pub fn app(state: AppState) -> Router {
    routes::api_router()
        .layer(middleware::from_fn(error::log_errors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
