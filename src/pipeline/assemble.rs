//! Final stage: apply the relevance vector to the candidate list.

use crate::model::{CandidateSong, RelevanceVector};

/// Keeps candidate `i` iff flag `i` is 1, preserving candidate order.
///
/// Pure, no I/O. The equal-length precondition is guaranteed upstream by
/// [`RelevanceVector`]'s validating construction.
pub fn assemble(
    candidates: Vec<CandidateSong>,
    relevance: &RelevanceVector,
) -> Vec<CandidateSong> {
    candidates
        .into_iter()
        .zip(relevance.flags())
        .filter(|&(_, &flag)| flag == 1)
        .map(|(candidate, _)| candidate)
        .collect()
}
