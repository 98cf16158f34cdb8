// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::engine::EngineOptions;

/// Candidate matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Substring,
    Fuzzy,
}

/// Suggestion behavior section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub debounce_ms: u64,
    pub min_query_length: usize,
    pub max_suggestions: usize,
    pub cache_results: bool,
    pub show_default_on_focus: bool,
    pub blur_close_ms: u64,
    pub matcher: MatcherKind,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        let options = EngineOptions::default();
        SuggestConfig {
            debounce_ms: options.debounce.as_millis() as u64,
            min_query_length: options.min_query_length,
            max_suggestions: options.max_suggestions,
            cache_results: options.cache_results,
            show_default_on_focus: options.show_default_on_focus,
            blur_close_ms: options.blur_close_delay.as_millis() as u64,
            matcher: MatcherKind::default(),
        }
    }
}

/// History section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub key: String,
    pub max_items: usize,
    /// Overrides the default history directory
    pub dir: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        let options = EngineOptions::default();
        HistoryConfig {
            enabled: options.enable_history,
            key: options.history_key,
            max_items: options.max_history_items,
            dir: None,
        }
    }
}

pub const DEFAULT_SOURCE_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_QUERY_PARAM: &str = "q";

/// Remote fetch source section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub query_param: String,
    pub timeout_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            url: None,
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            timeout_ms: DEFAULT_SOURCE_TIMEOUT_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub source: SourceConfig,
}
