//! Suggestion items
//!
//! Identity is by `id` only: two items with the same id are the same
//! suggestion for deduplication and history removal, whatever their labels.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::TypeaheadError;

/// Item identifier, either any JSON number or text
///
/// Integral floats such as `2.0` are stored as the integer `2`, so both
/// spellings name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "RawItemId")]
pub enum ItemId {
    Number(Number),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Number(Number),
    Text(String),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Number(n) => ItemId::Number(normalize_number(n)),
            RawItemId::Text(s) => ItemId::Text(s),
        }
    }
}

fn normalize_number(n: Number) -> Number {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n;
    };
    if f.fract() != 0.0 {
        return n;
    }

    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Number::from(f as i64)
    } else if f >= 0.0 && f < u64::MAX as f64 {
        Number::from(f as u64)
    } else {
        n
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(Number::from(n))
    }
}


impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

/// Optional descriptive data attached to an item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller-defined fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single suggestion candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: ItemId,
    /// Display and match text
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl SuggestionItem {
    pub fn new(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: None,
            metadata: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(Metadata::default).category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(Metadata::default).description =
            Some(description.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.metadata.as_ref()?.category.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.as_ref()?.description.as_deref()
    }
}

/// Parse a JSON array of suggestion items
pub fn parse_items(content: &str) -> Result<Vec<SuggestionItem>, TypeaheadError> {
    serde_json::from_str(content).map_err(|e| TypeaheadError::InvalidItems(e.to_string()))
}

/// Read a JSON array of suggestion items from a file
pub fn load_items(path: &Path) -> Result<Vec<SuggestionItem>, TypeaheadError> {
    let content = fs::read_to_string(path)?;
    parse_items(&content)
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
