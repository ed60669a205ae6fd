//! Single-stage variant behind `/filter-songs`: one oracle call over a
//! caller-supplied song list, no catalog aggregation, no alignment concern.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::PipelineError;
use super::parse;
use crate::oracle::TextOracle;

const FILTER_SYSTEM_PROMPT: &str = "You are a music curation assistant. Respond \
with exactly one JSON object and nothing else: no Markdown fences, no prose, no \
explanations.";

/// One filtered suggestion with the oracle's reasoning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredSong {
    pub name: String,
    pub artist: String,
    pub reason: String,
}

pub struct SongFilter<O> {
    oracle: Arc<O>,
}

impl<O: TextOracle> SongFilter<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    /// Asks the oracle which of `songs` are worth recommending.
    #[instrument(skip_all, fields(songs = songs.len()))]
    pub async fn filter(&self, songs: &[String]) -> Result<Vec<FilteredSong>, PipelineError> {
        let prompt = build_filter_prompt(songs);
        let raw = self.oracle.complete(FILTER_SYSTEM_PROMPT, &prompt).await?;

        let object = parse::parse_object(&raw)?;
        let field = object
            .get("suggestedSongs")
            .ok_or_else(|| PipelineError::Schema("missing 'suggestedSongs' field".to_string()))?;

        let suggested: Vec<FilteredSong> =
            serde_json::from_value(field.clone()).map_err(|e| {
                PipelineError::Schema(format!("'suggestedSongs' has unexpected element shape: {e}"))
            })?;

        debug!(suggested = suggested.len(), "filter stage judged songs");
        Ok(suggested)
    }
}

pub(crate) fn build_filter_prompt(songs: &[String]) -> String {
    format!(
        "From the following songs, keep only the ones worth recommending and \
         drop near-duplicates and low-quality variants:\n{}\n\
         For each kept song return its name, its artist, and one short reason \
         for keeping it.\n\
         Return a JSON object of the form {{\"suggestedSongs\": [{{\"name\": \
         \"...\", \"artist\": \"...\", \"reason\": \"...\"}}]}}.",
        songs.join("\n"),
    )
}
