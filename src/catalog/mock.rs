//! In-memory mock implementation of the catalog search service.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::error::CatalogError;
use super::CatalogSearch;

/// Canned per-title results with optional per-title failure injection.
/// Unknown titles return an empty result list, like a real search miss.
#[derive(Clone, Default)]
pub struct MockCatalog {
    responses: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    failing_titles: Arc<Mutex<HashSet<String>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the records returned for `title`.
    pub fn with_results(&self, title: impl Into<String>, records: Vec<Value>) {
        self.responses
            .lock()
            .expect("mock catalog lock poisoned")
            .insert(title.into(), records);
    }

    /// Makes searches for `title` fail with a 503.
    pub fn fail_for(&self, title: impl Into<String>) {
        self.failing_titles
            .lock()
            .expect("mock catalog lock poisoned")
            .insert(title.into());
    }

    /// Returns every query seen so far, in arrival order.
    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .expect("mock catalog lock poisoned")
            .clone()
    }
}

#[async_trait]
impl CatalogSearch for MockCatalog {
    async fn search(&self, title: &str) -> Result<Vec<Value>, CatalogError> {
        self.queries
            .lock()
            .expect("mock catalog lock poisoned")
            .push(title.to_string());

        if self
            .failing_titles
            .lock()
            .expect("mock catalog lock poisoned")
            .contains(title)
        {
            return Err(CatalogError::Status {
                title: title.to_string(),
                status: 503,
            });
        }

        Ok(self
            .responses
            .lock()
            .expect("mock catalog lock poisoned")
            .get(title)
            .cloned()
            .unwrap_or_default())
    }
}
