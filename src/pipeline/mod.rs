//! Multi-stage smart-search recommendation pipeline.
//!
//! Data flow for one request: user query → suggested titles (oracle call)
//! → concurrent catalog fan-out → popularity threshold → relevance
//! judgment (second oracle call) → assembled result. Each stage produces a
//! new collection so provenance stays traceable; no stage mutates a prior
//! stage's output.
//!
//! Both oracle calls cross an explicit parse-and-validate boundary
//! ([`parse`]): untrusted free text is cleaned, parsed to an untyped
//! intermediate, checked against the expected shape, and only then turned
//! into typed values. Malformed output is rejected, never repaired.

pub mod aggregate;
pub mod assemble;
pub mod error;
pub mod filter;
pub mod parse;
pub mod relevance;
pub mod suggestion;


pub use aggregate::{CatalogSearchAggregator, MIN_PLAY_COUNT};
pub use assemble::assemble;
pub use error::PipelineError;
pub use filter::{FilteredSong, SongFilter};
pub use relevance::RelevanceFilter;
pub use suggestion::{SUGGESTION_COUNT, SuggestionGenerator};

use std::sync::Arc;

use tracing::{info, instrument};

use crate::catalog::CatalogSearch;
use crate::model::{CandidateSong, SongQuery};
use crate::oracle::TextOracle;

/// The full smart-search pipeline over a text oracle and a catalog search
/// service.
pub struct SmartSearchPipeline<O, C> {
    suggestions: SuggestionGenerator<O>,
    aggregator: CatalogSearchAggregator<C>,
    relevance: RelevanceFilter<O>,
}

impl<O: TextOracle, C: CatalogSearch> SmartSearchPipeline<O, C> {
    pub fn new(oracle: Arc<O>, catalog: Arc<C>) -> Self {
        Self {
            suggestions: SuggestionGenerator::new(oracle.clone()),
            aggregator: CatalogSearchAggregator::new(catalog),
            relevance: RelevanceFilter::new(oracle),
        }
    }

    /// Runs all stages for one request.
    ///
    /// The relevance call waits for the complete fan-out (success or
    /// per-title failure) because it needs the final candidate count to
    /// request a matching-length vector. When nothing survives catalog
    /// resolution there is nothing to judge, and the second oracle call is
    /// skipped entirely.
    #[instrument(skip_all)]
    pub async fn run(&self, query: &SongQuery) -> Result<Vec<CandidateSong>, PipelineError> {
        let titles = self.suggestions.generate(query).await?;
        let candidates = self.aggregator.resolve(&titles).await;

        if candidates.is_empty() {
            info!("no candidates survived catalog resolution");
            return Ok(Vec::new());
        }

        let relevance = self.relevance.filter(query, &candidates).await?;
        let result = assemble(candidates, &relevance);

        info!(kept = result.len(), "smart search pipeline complete");
        Ok(result)
    }
}
