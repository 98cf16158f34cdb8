//! Operations on a most-recent-first history list
//!
//! A history list never holds two items with the same id.

use std::collections::HashSet;

use crate::item::{ItemId, SuggestionItem};

/// Move `item` to the front, dropping any older entry with the same id,
/// and trim to `max_items`
pub fn upsert(
    history: &[SuggestionItem],
    item: SuggestionItem,
    max_items: usize,
) -> Vec<SuggestionItem> {
    let mut updated = Vec::with_capacity(history.len() + 1);
    let id = item.id.clone();
    updated.push(item);
    updated.extend(history.iter().filter(|h| h.id != id).cloned());
    trim_to_max(updated, max_items)
}

pub fn remove_item(history: &[SuggestionItem], id: &ItemId) -> Vec<SuggestionItem> {
    history.iter().filter(|h| &h.id != id).cloned().collect()
}

/// Keep the first occurrence of every id
pub fn deduplicate(entries: Vec<SuggestionItem>) -> Vec<SuggestionItem> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

pub fn trim_to_max(mut entries: Vec<SuggestionItem>, max_items: usize) -> Vec<SuggestionItem> {
    entries.truncate(max_items);
    entries
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod list_tests;
