use std::sync::Arc;

use crate::catalog::CatalogSearch;
use crate::oracle::TextOracle;
use crate::pipeline::{SmartSearchPipeline, SongFilter};

/// Shared handler state: the multi-stage pipeline, the single-stage song
/// filter, and the shared-secret API key.
pub struct AppState<O, C> {
    pub pipeline: Arc<SmartSearchPipeline<O, C>>,
    pub song_filter: Arc<SongFilter<O>>,
    pub api_key: Arc<str>,
}

impl<O: TextOracle, C: CatalogSearch> AppState<O, C> {
    pub fn new(oracle: Arc<O>, catalog: Arc<C>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            pipeline: Arc::new(SmartSearchPipeline::new(oracle.clone(), catalog)),
            song_filter: Arc::new(SongFilter::new(oracle)),
            api_key: api_key.into(),
        }
    }
}

impl<O, C> Clone for AppState<O, C> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            song_filter: self.song_filter.clone(),
            api_key: self.api_key.clone(),
        }
    }
}
