use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use super::suggestion_engine::{ChangeHook, EngineParts, SelectHook, SuggestionEngine};
use crate::config::Config;
use crate::error::TypeaheadError;
use crate::fetch::SuggestionSource;
use crate::history::{HistoryStore, MemoryHistoryStore};
use crate::item::SuggestionItem;
use crate::matcher::{SubstringFilter, SuggestionFilter};

pub const DEFAULT_HISTORY_KEY: &str = "default";
pub const DEFAULT_MAX_HISTORY_ITEMS: usize = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 1;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;
pub const DEFAULT_BLUR_CLOSE_MS: u64 = 150;

/// Scalar engine behavior
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    pub show_default_on_focus: bool,
    pub enable_history: bool,
    pub history_key: String,
    pub max_history_items: usize,
    pub debounce: Duration,
    pub min_query_length: usize,
    pub max_suggestions: usize,
    pub cache_results: bool,
    /// Grace period between blur and close
    pub blur_close_delay: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            show_default_on_focus: false,
            enable_history: true,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            max_history_items: DEFAULT_MAX_HISTORY_ITEMS,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            cache_results: true,
            blur_close_delay: Duration::from_millis(DEFAULT_BLUR_CLOSE_MS),
        }
    }
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        Self {
            show_default_on_focus: config.suggest.show_default_on_focus,
            enable_history: config.history.enabled,
            history_key: config.history.key.clone(),
            max_history_items: config.history.max_items,
            debounce: Duration::from_millis(config.suggest.debounce_ms),
            min_query_length: config.suggest.min_query_length,
            max_suggestions: config.suggest.max_suggestions,
            cache_results: config.suggest.cache_results,
            blur_close_delay: Duration::from_millis(config.suggest.blur_close_ms),
        }
    }
}

/// Collects sources, hooks and options for a [`SuggestionEngine`]
///
/// Without an explicit history store, history lives in memory for the
/// engine's lifetime.
pub struct EngineBuilder {
    options: EngineOptions,
    suggestions: Vec<SuggestionItem>,
    default_suggestions: Vec<SuggestionItem>,
    source: Option<Arc<dyn SuggestionSource>>,
    filter: Arc<dyn SuggestionFilter>,
    history_store: Option<Arc<dyn HistoryStore>>,
    on_change: Option<ChangeHook>,
    on_select: Option<SelectHook>,
    runtime: Option<Handle>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            suggestions: Vec::new(),
            default_suggestions: Vec::new(),
            source: None,
            filter: Arc::new(SubstringFilter),
            history_store: None,
            on_change: None,
            on_select: None,
            runtime: None,
        }
    }

    pub fn options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn suggestions(mut self, suggestions: Vec<SuggestionItem>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn default_suggestions(mut self, defaults: Vec<SuggestionItem>) -> Self {
        self.default_suggestions = defaults;
        self
    }

    pub fn show_default_on_focus(mut self, show: bool) -> Self {
        self.options.show_default_on_focus = show;
        self
    }

    pub fn fetch_source(mut self, source: impl SuggestionSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn shared_fetch_source(mut self, source: Arc<dyn SuggestionSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn filter(mut self, filter: impl SuggestionFilter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    pub fn history_store(mut self, store: Arc<dyn HistoryStore>) -> Self {
        self.history_store = Some(store);
        self
    }

    pub fn enable_history(mut self, enabled: bool) -> Self {
        self.options.enable_history = enabled;
        self
    }

    pub fn history_key(mut self, key: impl Into<String>) -> Self {
        self.options.history_key = key.into();
        self
    }

    pub fn max_history_items(mut self, max: usize) -> Self {
        self.options.max_history_items = max;
        self
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.options.debounce = debounce;
        self
    }

    pub fn min_query_length(mut self, len: usize) -> Self {
        self.options.min_query_length = len;
        self
    }

    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.options.max_suggestions = max;
        self
    }

    pub fn cache_results(mut self, enabled: bool) -> Self {
        self.options.cache_results = enabled;
        self
    }

    pub fn blur_close_delay(mut self, delay: Duration) -> Self {
        self.options.blur_close_delay = delay;
        self
    }

    pub fn on_change(mut self, hook: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    pub fn on_select(mut self, hook: impl FnMut(&SuggestionItem) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(hook));
        self
    }

    /// Runtime for fetch tasks; defaults to the ambient tokio runtime
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Build the engine and load history for the configured key
    pub fn build(self) -> Result<SuggestionEngine, TypeaheadError> {
        let runtime = match (&self.source, self.runtime) {
            (Some(_), Some(handle)) => Some(handle),
            (Some(_), None) => Some(Handle::try_current().map_err(|_| TypeaheadError::NoRuntime)?),
            (None, _) => None,
        };

        let history_store = self
            .history_store
            .unwrap_or_else(|| Arc::new(MemoryHistoryStore::new()));

        Ok(SuggestionEngine::new(EngineParts {
            options: self.options,
            suggestions: self.suggestions,
            default_suggestions: self.default_suggestions,
            source: self.source.zip(runtime),
            filter: self.filter,
            history_store,
            on_change: self.on_change,
            on_select: self.on_select,
        }))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
