//! HTTP gateway (Axum) for the smart-search service.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{API_KEY_HEADER, filter_songs_handler, smart_search_handler};
pub use state::AppState;

use crate::catalog::CatalogSearch;
use crate::oracle::TextOracle;

pub fn create_router_with_state<O, C>(state: AppState<O, C>) -> Router
where
    O: TextOracle + 'static,
    C: CatalogSearch + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/smart-search", post(smart_search_handler))
        .route("/filter-songs", post(filter_songs_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
