//! Typeahead suggestion engine
//!
//! Turns keystrokes into a ranked, deduplicated candidate list drawn from
//! static suggestions, an asynchronous fetch source, default items and a
//! persisted per-key search history.

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod history;
pub mod item;
pub mod matcher;

#[cfg(test)]
mod test_utils;

pub use engine::{CandidateOrigin, EngineBuilder, EngineState, NavKey, SuggestionEngine};
pub use error::{SuggestionError, TypeaheadError};
pub use fetch::{FetchError, SuggestionSource, source_fn};
pub use history::{FileHistoryStore, HistoryStore, MemoryHistoryStore};
pub use item::{ItemId, Metadata, SuggestionItem};
pub use matcher::{FuzzyFilter, SubstringFilter, SuggestionFilter, highlight_match};
