//! Suggestion engine
//!
//! Owns the query, open/loading/error flags, the selection, the history
//! snapshot and the result cache. Every entry point is a plain method called
//! from the consumer's event loop; fetches finish on the tokio runtime and are
//! applied when the loop calls [`SuggestionEngine::poll`] or
//! [`SuggestionEngine::settle`].

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;

use super::builder::EngineOptions;
use super::nav::NavKey;
use super::pipeline::{self, CandidateOrigin, MergeInput};
use super::state::EngineState;
use crate::error::SuggestionError;
use crate::fetch::{FetchGate, FetchResult, ResultCache, SuggestionSource};
use crate::history::HistoryStore;
use crate::item::{ItemId, SuggestionItem};
use crate::matcher::SuggestionFilter;

pub type ChangeHook = Box<dyn FnMut(&str) + Send>;
pub type SelectHook = Box<dyn FnMut(&SuggestionItem) + Send>;

pub(super) struct EngineParts {
    pub options: EngineOptions,
    pub suggestions: Vec<SuggestionItem>,
    pub default_suggestions: Vec<SuggestionItem>,
    pub source: Option<(Arc<dyn SuggestionSource>, Handle)>,
    pub filter: Arc<dyn SuggestionFilter>,
    pub history_store: Arc<dyn HistoryStore>,
    pub on_change: Option<ChangeHook>,
    pub on_select: Option<SelectHook>,
}

pub struct SuggestionEngine {
    state: EngineState,
    options: EngineOptions,
    suggestions: Vec<SuggestionItem>,
    default_suggestions: Vec<SuggestionItem>,
    filter: Arc<dyn SuggestionFilter>,
    history_store: Arc<dyn HistoryStore>,
    /// History ids hidden until the snapshot next changes
    removed: HashSet<ItemId>,
    cache: ResultCache,
    gate: Option<FetchGate>,
    blur_deadline: Option<Instant>,
    on_change: Option<ChangeHook>,
    on_select: Option<SelectHook>,
}

impl SuggestionEngine {
    pub(super) fn new(parts: EngineParts) -> Self {
        let EngineParts {
            options,
            suggestions,
            default_suggestions,
            source,
            filter,
            history_store,
            on_change,
            on_select,
        } = parts;

        let history = if options.enable_history {
            history_store.load(&options.history_key)
        } else {
            Vec::new()
        };
        log::debug!(
            "Loaded {} history items for key {:?}",
            history.len(),
            options.history_key
        );

        let gate = source.map(|(source, runtime)| FetchGate::new(source, options.debounce, runtime));

        Self {
            state: EngineState::with_history(history),
            cache: ResultCache::new(options.cache_results),
            options,
            suggestions,
            default_suggestions,
            filter,
            history_store,
            removed: HashSet::new(),
            gate,
            blur_deadline: None,
            on_change,
            on_select,
        }
    }

    // ===== Entry points =====

    /// Handle edited query text
    pub fn on_input_change(&mut self, text: &str) {
        self.state.query = text.to_string();
        self.state.error = None;
        self.state.selected_index = None;
        self.notify_change(text);
        self.state.is_open = true;

        let qualifies = pipeline::qualifies_for_fetch(text, self.options.min_query_length);
        let Some(gate) = self.gate.as_mut() else {
            self.state.is_loading = false;
            return;
        };

        if !qualifies {
            gate.cancel();
            self.state.is_loading = false;
        } else if self.cache.is_fresh(text) {
            log::debug!("Cache hit for {:?}", text);
            gate.cancel();
            self.state.is_loading = false;
        } else {
            self.state.is_loading = true;
            gate.schedule(text.to_string());
        }
    }

    /// Keyboard navigation; ignored while the list is closed
    pub fn on_key_down(&mut self, key: NavKey) {
        if !self.state.is_open {
            return;
        }

        match key {
            NavKey::ArrowDown | NavKey::ArrowUp => {
                let count = self.candidates().len();
                self.state.selected_index = key.step(self.state.selected_index, count);
            }
            NavKey::Escape => self.close(),
            NavKey::Other => {}
        }
    }

    pub fn on_focus(&mut self) {
        self.blur_deadline = None;
        self.state.is_open = true;
    }

    /// Close after the blur grace period, so a pointer selection that lands
    /// just after blur still sees an open list
    pub fn on_blur(&mut self) {
        if self.options.blur_close_delay.is_zero() {
            self.close();
        } else {
            self.blur_deadline = Some(Instant::now() + self.options.blur_close_delay);
        }
    }

    /// Accept `item`: it becomes the query and, with history on, the most
    /// recent history entry
    pub fn select(&mut self, item: SuggestionItem) {
        self.state.query = item.label.clone();
        self.state.is_open = false;
        self.state.selected_index = None;
        self.blur_deadline = None;

        if self.options.enable_history {
            let updated = self.history_store.add(
                &self.options.history_key,
                item.clone(),
                self.options.max_history_items,
            );
            self.replace_history(updated);
        }

        if let Some(hook) = self.on_select.as_mut() {
            hook(&item);
        }
    }

    /// Select the highlighted candidate, or the first one
    ///
    /// Returns the selected item, or None when the list is closed or empty.
    pub fn commit(&mut self) -> Option<SuggestionItem> {
        if !self.state.is_open {
            return None;
        }

        let candidates = self.candidates();
        let item = self
            .state
            .selected_index
            .and_then(|idx| candidates.get(idx))
            .or_else(|| candidates.first())
            .cloned()?;

        self.select(item.clone());
        Some(item)
    }

    pub fn clear(&mut self) {
        self.state.query.clear();
        self.state.selected_index = None;
        self.state.is_open = false;
        if let Some(gate) = self.gate.as_mut() {
            gate.cancel();
        }
        self.state.is_loading = false;
        self.notify_change("");
    }

    /// Hide `id` immediately and drop it from the stored history
    ///
    /// The stored record is updated even with history disabled; only the
    /// in-memory snapshot stays empty.
    pub fn remove_from_history(&mut self, id: &ItemId) {
        self.removed.insert(id.clone());

        let updated = self.history_store.remove(&self.options.history_key, id);
        if self.options.enable_history {
            self.replace_history(updated);
        }

        self.clamp_selection();
    }

    /// Replace the query without opening, fetching or notifying
    pub fn set_query(&mut self, text: &str) {
        self.state.query = text.to_string();
    }

    // ===== Asynchronous completion =====

    /// Apply a finished fetch and fire the blur timer if due
    ///
    /// Returns true if the exposed state changed.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(result) = self.gate.as_mut().and_then(FetchGate::try_next) {
            self.apply_fetch_result(result);
            changed = true;
        }

        if self.blur_deadline.is_some_and(|deadline| deadline <= now) {
            self.blur_deadline = None;
            self.close();
            changed = true;
        }

        changed
    }

    /// Wait for the pending fetch, if any, and apply it
    pub async fn settle(&mut self) {
        let result = match self.gate.as_mut() {
            Some(gate) => gate.next().await,
            None => None,
        };
        if let Some(result) = result {
            self.apply_fetch_result(result);
        }
    }

    fn apply_fetch_result(&mut self, result: FetchResult) {
        self.state.is_loading = false;
        match result {
            FetchResult::Loaded { query, items } => {
                self.state.error = None;
                self.cache.insert(query, items);
                self.clamp_selection();
            }
            FetchResult::Failed { query, error } => {
                log::debug!("Suggestions for {:?} failed: {}", query, error);
                self.state.error = Some(SuggestionError::FetchFailed);
            }
        }
    }

    // ===== Derived state =====

    /// Final candidate list for the current state
    pub fn candidates(&self) -> Vec<SuggestionItem> {
        let base = pipeline::base_set(
            &self.state.query,
            self.gate.is_some(),
            self.options.min_query_length,
            &self.cache,
            &self.suggestions,
        );

        pipeline::merge_candidates(&MergeInput {
            query: &self.state.query,
            base,
            defaults: &self.default_suggestions,
            history: &self.state.history,
            removed: &self.removed,
            show_defaults: self.options.show_default_on_focus,
            enable_history: self.options.enable_history,
            filter: self.filter.as_ref(),
            max_suggestions: self.options.max_suggestions,
        })
    }

    pub fn candidate_origin(&self, item: &SuggestionItem) -> CandidateOrigin {
        pipeline::classify(item, &self.state.history, &self.default_suggestions)
    }

    pub fn selected_item(&self) -> Option<SuggestionItem> {
        let idx = self.state.selected_index?;
        self.candidates().into_iter().nth(idx)
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index
    }

    pub fn error(&self) -> Option<&SuggestionError> {
        self.state.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.error_message()
    }

    pub fn history(&self) -> &[SuggestionItem] {
        &self.state.history
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn has_fetch_source(&self) -> bool {
        self.gate.is_some()
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.gate.as_ref().is_some_and(FetchGate::is_pending)
    }

    // ===== Internals =====

    fn notify_change(&mut self, value: &str) {
        if let Some(hook) = self.on_change.as_mut() {
            hook(value);
        }
    }

    /// New snapshot; the removal overlay only applies to the old one
    fn replace_history(&mut self, history: Vec<SuggestionItem>) {
        if history != self.state.history {
            self.state.history = history;
            self.removed.clear();
        }
    }

    fn close(&mut self) {
        self.state.is_open = false;
        self.state.selected_index = None;
    }

    fn clamp_selection(&mut self) {
        if let Some(idx) = self.state.selected_index
            && idx >= self.candidates().len()
        {
            self.state.selected_index = None;
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
