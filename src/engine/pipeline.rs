//! Candidate merge pipeline
//!
//! Order matters: history and defaults are prepended before filtering so the
//! query can match them too, and deduplication keeps the first occurrence so
//! they win over fetched or static duplicates.

use std::collections::HashSet;

use crate::fetch::ResultCache;
use crate::item::{ItemId, SuggestionItem};
use crate::matcher::SuggestionFilter;

/// Where a candidate came from, for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    History,
    Default,
    Suggestion,
}

pub struct MergeInput<'a> {
    pub query: &'a str,
    /// Cached fetch results or static suggestions, see [`base_set`]
    pub base: &'a [SuggestionItem],
    pub defaults: &'a [SuggestionItem],
    pub history: &'a [SuggestionItem],
    pub removed: &'a HashSet<ItemId>,
    pub show_defaults: bool,
    pub enable_history: bool,
    pub filter: &'a dyn SuggestionFilter,
    pub max_suggestions: usize,
}

/// Whether `query` is long enough to go to the fetch source
pub fn qualifies_for_fetch(query: &str, min_query_length: usize) -> bool {
    query.chars().count() >= min_query_length
}

/// Fetched results for the exact query once a fetch source applies,
/// otherwise the static suggestions
pub fn base_set<'a>(
    query: &str,
    fetching: bool,
    min_query_length: usize,
    cache: &'a ResultCache,
    suggestions: &'a [SuggestionItem],
) -> &'a [SuggestionItem] {
    if fetching && qualifies_for_fetch(query, min_query_length) {
        cache.get(query).unwrap_or(&[])
    } else {
        suggestions
    }
}

pub fn merge_candidates(input: &MergeInput<'_>) -> Vec<SuggestionItem> {
    let empty_query = input.query.is_empty();
    let mut assembled: Vec<SuggestionItem> = Vec::new();

    if input.enable_history && empty_query {
        assembled.extend(
            input
                .history
                .iter()
                .filter(|item| !input.removed.contains(&item.id))
                .cloned(),
        );
    }

    if input.show_defaults && empty_query {
        assembled.extend(input.defaults.iter().cloned());
    }

    assembled.extend(input.base.iter().cloned());

    let filtered = if empty_query {
        assembled
    } else {
        input.filter.filter(&assembled, input.query)
    };

    let mut seen = HashSet::new();
    filtered
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .take(input.max_suggestions)
        .collect()
}

/// History wins over defaults, matching the pipeline's priority
pub fn classify(
    item: &SuggestionItem,
    history: &[SuggestionItem],
    defaults: &[SuggestionItem],
) -> CandidateOrigin {
    if history.iter().any(|h| h.id == item.id) {
        CandidateOrigin::History
    } else if defaults.iter().any(|d| d.id == item.id) {
        CandidateOrigin::Default
    } else {
        CandidateOrigin::Suggestion
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
