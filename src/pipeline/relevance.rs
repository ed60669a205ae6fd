//! Second oracle stage: judge every candidate against the original query.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use super::error::PipelineError;
use super::parse;
use crate::model::{CandidateSong, RelevanceVector, SongQuery};
use crate::oracle::TextOracle;

const RELEVANCE_SYSTEM_PROMPT: &str = "You are a music relevance judge. Respond \
with exactly one JSON object and nothing else: no Markdown fences, no prose, no \
explanations.";

/// Reduced candidate view embedded into the relevance prompt. Ids and URLs
/// carry no signal for the judgment and only inflate the prompt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateProjection<'a> {
    title: &'a str,
    album: &'a str,
    artist: &'a str,
    language: &'a str,
    year: &'a str,
    play_count: u64,
}

impl<'a> From<&'a CandidateSong> for CandidateProjection<'a> {
    fn from(candidate: &'a CandidateSong) -> Self {
        Self {
            title: &candidate.title,
            album: &candidate.album,
            artist: &candidate.artist,
            language: &candidate.language,
            year: &candidate.year,
            play_count: candidate.play_count,
        }
    }
}

pub struct RelevanceFilter<O> {
    oracle: Arc<O>,
}

impl<O: TextOracle> RelevanceFilter<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }

    /// Returns one 0/1 flag per candidate, in candidate order.
    ///
    /// Deduplication is delegated to the oracle through the prompt: every
    /// occurrence of a duplicated song is to be marked 0. The flags are
    /// only trusted positionally, which is why the length check below is
    /// fatal. A same-length but reordered vector is undetectable here.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn filter(
        &self,
        query: &SongQuery,
        candidates: &[CandidateSong],
    ) -> Result<RelevanceVector, PipelineError> {
        let prompt = build_relevance_prompt(query, candidates);
        let raw = self.oracle.complete(RELEVANCE_SYSTEM_PROMPT, &prompt).await?;

        let object = parse::parse_object(&raw)?;
        let flags = parse::integer_array(&object, "relevance")?;
        let vector = validate_alignment(flags, candidates.len())?;

        debug!(relevant = vector.relevant_count(), "relevance stage judged candidates");
        Ok(vector)
    }
}

pub(crate) fn build_relevance_prompt(query: &SongQuery, candidates: &[CandidateSong]) -> String {
    let projections: Vec<CandidateProjection<'_>> = candidates.iter().map(Into::into).collect();
    let listing =
        serde_json::to_string_pretty(&projections).unwrap_or_else(|_| "[]".to_string());

    format!(
        "The user asked for: \"{}\".\n\
         Below are {} candidate songs. For each candidate, in the given \
         order, output 1 if it is relevant to the request and 0 otherwise. \
         If the same song appears more than once, output 0 for every one of \
         its occurrences. Output exactly one flag per candidate.\n\
         Candidates:\n{listing}\n\
         Return a JSON object of the form {{\"relevance\": [0, 1, ...]}}.",
        query.as_prompt_text(),
        candidates.len(),
    )
}

/// Enforces the alignment invariant: exactly one binary flag per candidate.
fn validate_alignment(
    flags: Vec<i64>,
    expected: usize,
) -> Result<RelevanceVector, PipelineError> {
    if flags.len() != expected {
        return Err(PipelineError::AlignmentMismatch {
            expected,
            actual: flags.len(),
        });
    }

    let mut validated = Vec::with_capacity(flags.len());
    for flag in flags {
        match flag {
            0 | 1 => validated.push(flag as u8),
            other => {
                return Err(PipelineError::Schema(format!(
                    "relevance flag {other} is not binary"
                )));
            }
        }
    }

    Ok(RelevanceVector::from_validated(validated))
}
