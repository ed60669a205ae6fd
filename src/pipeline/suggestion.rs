//! First oracle stage: free-form user input to candidate song titles.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::PipelineError;
use super::parse;
use crate::model::SongQuery;
use crate::oracle::TextOracle;

/// Suggestions requested when the input does not name a specific song.
pub const SUGGESTION_COUNT: usize = 10;

/// Format constraints here are advisory for the oracle; [`parse`] is what
/// actually enforces them.
const SUGGESTION_SYSTEM_PROMPT: &str = "You are a music recommendation engine. \
Respond with exactly one JSON object and nothing else: no Markdown fences, no \
prose, no explanations.";

pub struct SuggestionGenerator<O> {
    oracle: Arc<O>,
}

impl<O: TextOracle> SuggestionGenerator<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    /// Asks the oracle for candidate titles matching `query`.
    ///
    /// The returned titles carry no uniqueness guarantee; downstream stages
    /// handle duplicates.
    #[instrument(skip_all)]
    pub async fn generate(&self, query: &SongQuery) -> Result<Vec<String>, PipelineError> {
        let prompt = build_suggestion_prompt(query);
        let raw = self.oracle.complete(SUGGESTION_SYSTEM_PROMPT, &prompt).await?;

        let object = parse::parse_object(&raw)?;
        let titles = parse::string_array(&object, "songs")?;

        debug!(titles = titles.len(), "suggestion stage produced titles");
        Ok(titles)
    }
}

pub(crate) fn build_suggestion_prompt(query: &SongQuery) -> String {
    format!(
        "The user asked for: \"{}\".\n\
         If this names one specific song, return that song alone. Otherwise \
         return exactly {SUGGESTION_COUNT} song suggestions matching the \
         request, each as \"Title - Artist\".\n\
         Return a JSON object of the form {{\"songs\": [\"...\"]}}.",
        query.as_prompt_text()
    )
}
