use std::collections::HashMap;

use crate::item::SuggestionItem;

/// Fetched results keyed by the exact query string
///
/// Entries live for the whole session. With caching disabled only the most
/// recent result is kept, so the current query can still render it.
#[derive(Debug, Clone)]
pub struct ResultCache {
    enabled: bool,
    entries: HashMap<String, Vec<SuggestionItem>>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ResultCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: HashMap::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get(&self, query: &str) -> Option<&[SuggestionItem]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    /// Whether a fetch for `query` can be skipped
    pub fn is_fresh(&self, query: &str) -> bool {
        self.enabled && self.entries.contains_key(query)
    }

    pub fn insert(&mut self, query: String, items: Vec<SuggestionItem>) {
        if !self.enabled {
            self.entries.clear();
        }
        self.entries.insert(query, items);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
