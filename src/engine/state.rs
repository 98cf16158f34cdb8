use crate::error::SuggestionError;
use crate::item::SuggestionItem;

/// Everything a renderer needs besides the candidate list
///
/// Only the engine mutates this; renderers get a shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    pub query: String,
    pub is_open: bool,
    pub is_loading: bool,
    /// Index into the current candidate list (None = no selection)
    pub selected_index: Option<usize>,
    pub error: Option<SuggestionError>,
    /// History snapshot for the engine's key, most recent first
    pub history: Vec<SuggestionItem>,
}

impl EngineState {
    pub fn with_history(history: Vec<SuggestionItem>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
