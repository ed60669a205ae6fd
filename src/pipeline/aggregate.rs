//! Catalog fan-out stage: candidate titles to thresholded candidate songs.

use std::sync::Arc;

use futures_util::future;
use tracing::{debug, instrument, warn};

use crate::catalog::CatalogSearch;
use crate::model::CandidateSong;

/// Candidates below this play count never reach the relevance stage.
/// Fixed business rule, not user-configurable.
pub const MIN_PLAY_COUNT: u64 = 90_000;

pub struct CatalogSearchAggregator<C> {
    catalog: Arc<C>,
}

impl<C: CatalogSearch> CatalogSearchAggregator<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Resolves every title against the catalog concurrently and flattens
    /// the hits into one thresholded candidate list.
    ///
    /// All searches run at once; `join_all` collects each result in the
    /// slot of the title that spawned it, so output order is input title
    /// order, then the catalog's own result order within a title. A failed
    /// or malformed search contributes nothing and leaves the other titles
    /// untouched. Duplicate tracks surfacing under different titles are
    /// kept: the relevance stage is instructed to zero them out.
    #[instrument(skip_all, fields(titles = titles.len()))]
    pub async fn resolve(&self, titles: &[String]) -> Vec<CandidateSong> {
        let searches = titles.iter().map(|title| self.catalog.search(title));
        let outcomes = future::join_all(searches).await;

        let mut candidates = Vec::new();
        for (title, outcome) in titles.iter().zip(outcomes) {
            match outcome {
                Ok(records) => {
                    candidates.extend(records.iter().map(CandidateSong::from_record));
                }
                Err(error) => {
                    warn!(%title, %error, "catalog search failed, dropping title");
                }
            }
        }

        let resolved = candidates.len();
        candidates.retain(|candidate| candidate.play_count >= MIN_PLAY_COUNT);
        debug!(
            resolved,
            kept = candidates.len(),
            "thresholded catalog candidates"
        );
        candidates
    }
}
