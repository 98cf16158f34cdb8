use super::{SuggestionFilter, match_fields};
use crate::item::SuggestionItem;

/// Case-insensitive substring match on label, value or category
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl SuggestionFilter for SubstringFilter {
    fn filter(&self, items: &[SuggestionItem], query: &str) -> Vec<SuggestionItem> {
        if query.trim().is_empty() {
            return items.to_vec();
        }

        let query_lower = query.to_lowercase();
        items
            .iter()
            .filter(|item| {
                match_fields(item).any(|text| text.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect()
    }
}
