use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::{SuggestionFilter, match_fields};
use crate::item::SuggestionItem;

/// fzf-style filter: every whitespace-separated term must fuzzy-match one of
/// the item's fields. Input order is preserved so history stays first.
pub struct FuzzyFilter {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for FuzzyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyFilter").finish_non_exhaustive()
    }
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyFilter {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    fn matches(&self, item: &SuggestionItem, terms: &[&str]) -> bool {
        terms.iter().all(|term| {
            match_fields(item).any(|text| self.matcher.fuzzy_match(text, term).is_some())
        })
    }
}

impl SuggestionFilter for FuzzyFilter {
    fn filter(&self, items: &[SuggestionItem], query: &str) -> Vec<SuggestionItem> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return items.to_vec();
        }

        items
            .iter()
            .filter(|item| self.matches(item, &terms))
            .cloned()
            .collect()
    }
}
