//! Catalog search service client.
//!
//! Maps a song title query to the raw track records the external catalog
//! returns for it. Records stay untyped (`serde_json::Value`) on purpose:
//! the catalog's response shape is untrusted, and typing happens at the
//! defaulting boundary in [`crate::model::CandidateSong::from_record`].

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::CatalogError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCatalog;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;

/// Default per-search request timeout.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Title-to-track-records search collaborator.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Returns the raw track records matching `title`, in the catalog's
    /// own result order. Errors are per-title: the caller absorbs them
    /// without failing the surrounding request.
    async fn search(&self, title: &str) -> Result<Vec<Value>, CatalogError>;
}

/// HTTP client for the external catalog search service
/// (`GET {base}/search/songs?query=<title>`).
#[derive(Clone)]
pub struct HttpCatalogClient {
    http: HttpClient,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| HttpClient::new());

        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CatalogSearch for HttpCatalogClient {
    async fn search(&self, title: &str) -> Result<Vec<Value>, CatalogError> {
        let url = format!("{}/search/songs", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("query", title)])
            .send()
            .await
            .map_err(|e| CatalogError::Request {
                title: title.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                title: title.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| CatalogError::Request {
            title: title.to_string(),
            message: format!("response body was not JSON: {e}"),
        })?;

        extract_results(&body).ok_or_else(|| CatalogError::MalformedResponse {
            title: title.to_string(),
        })
    }
}

/// Accepts the results array either at the top level (`results`) or nested
/// under a `data` envelope (`data.results`); the catalog has shipped both.
fn extract_results(body: &Value) -> Option<Vec<Value>> {
    let results = body
        .get("results")
        .or_else(|| body.get("data")?.get("results"))?;
    results.as_array().cloned()
}
