use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use super::error::GatewayError;
use super::state::AppState;
use crate::catalog::CatalogSearch;
use crate::model::{CandidateSong, SongQuery};
use crate::oracle::TextOracle;
use crate::pipeline::FilteredSong;

/// Header carrying the shared-secret API key.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Deserialize)]
pub struct SmartSearchRequest {
    pub songs: SongQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSearchResponse {
    pub suggested_songs: Vec<CandidateSong>,
}

#[derive(Debug, Deserialize)]
pub struct FilterSongsRequest {
    pub songs: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSongsResponse {
    pub suggested_songs: Vec<FilteredSong>,
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn smart_search_handler<O, C>(
    State(state): State<AppState<O, C>>,
    headers: HeaderMap,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<SmartSearchResponse>, GatewayError>
where
    O: TextOracle + 'static,
    C: CatalogSearch + 'static,
{
    require_api_key(&headers, &state.api_key)?;

    let request: SmartSearchRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {e}")))?;

    if request.songs.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "'songs' must not be empty".to_string(),
        ));
    }

    let suggested_songs = state.pipeline.run(&request.songs).await.map_err(|e| {
        error!(error = %e, "smart search pipeline failed");
        GatewayError::Pipeline(e)
    })?;

    info!(suggested = suggested_songs.len(), "smart search request served");
    Ok(Json(SmartSearchResponse { suggested_songs }))
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn filter_songs_handler<O, C>(
    State(state): State<AppState<O, C>>,
    headers: HeaderMap,
    Json(request): Json<serde_json::Value>,
) -> Result<Json<FilterSongsResponse>, GatewayError>
where
    O: TextOracle + 'static,
    C: CatalogSearch + 'static,
{
    require_api_key(&headers, &state.api_key)?;

    let request: FilterSongsRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("invalid request schema: {e}")))?;

    if request.songs.is_empty() {
        return Ok(Json(FilterSongsResponse {
            suggested_songs: Vec::new(),
        }));
    }

    let suggested_songs = state.song_filter.filter(&request.songs).await.map_err(|e| {
        error!(error = %e, "song filter failed");
        GatewayError::Pipeline(e)
    })?;

    info!(suggested = suggested_songs.len(), "filter songs request served");
    Ok(Json(FilterSongsResponse { suggested_songs }))
}

/// Rejects the request before any pipeline work when the shared secret is
/// missing or wrong.
pub(crate) fn require_api_key(headers: &HeaderMap, expected: &str) -> Result<(), GatewayError> {
    match headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) {
        Some(provided) if provided == expected => Ok(()),
        _ => Err(GatewayError::Forbidden),
    }
}
