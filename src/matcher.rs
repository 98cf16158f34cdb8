//! Candidate filtering
//!
//! The engine treats a filter as opaque: it hands over the assembled
//! candidate list and the current query, and keeps whatever comes back.

mod fuzzy;
mod highlight;
mod substring;

pub use fuzzy::FuzzyFilter;
pub use highlight::{Segment, highlight_match};
pub use substring::SubstringFilter;

use crate::item::SuggestionItem;

/// Pluggable matching function
pub trait SuggestionFilter: Send + Sync {
    fn filter(&self, items: &[SuggestionItem], query: &str) -> Vec<SuggestionItem>;
}

/// Adapter turning a closure into a [`SuggestionFilter`]
pub struct FnFilter<F>(F);

/// Wrap a closure as a filter
pub fn filter_fn<F>(f: F) -> FnFilter<F>
where
    F: Fn(&[SuggestionItem], &str) -> Vec<SuggestionItem> + Send + Sync,
{
    FnFilter(f)
}

impl<F> SuggestionFilter for FnFilter<F>
where
    F: Fn(&[SuggestionItem], &str) -> Vec<SuggestionItem> + Send + Sync,
{
    fn filter(&self, items: &[SuggestionItem], query: &str) -> Vec<SuggestionItem> {
        (self.0)(items, query)
    }
}

/// Texts an item can be matched on: label, then value, then category
pub(crate) fn match_fields(item: &SuggestionItem) -> impl Iterator<Item = &str> {
    std::iter::once(item.label.as_str())
        .chain(item.value.as_deref())
        .chain(item.category())
}
