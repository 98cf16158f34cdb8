use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::engine::SuggestionEngine;

/// Application state
pub struct App {
    pub engine: SuggestionEngine,
    pub textarea: TextArea<'static>,
    pub should_quit: bool,
    /// Shown in the status line until the first engine error
    pub warning: Option<String>,
}

impl App {
    pub fn new(mut engine: SuggestionEngine) -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type to search");

        // The input owns focus from the start
        engine.on_focus();

        Self {
            engine,
            textarea,
            should_quit: false,
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the input field
    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Pick up finished fetches; true when a redraw is needed
    pub fn tick(&mut self) -> bool {
        self.engine.poll()
    }

    /// Overwrite the input text without notifying the engine
    pub(super) fn replace_query_with(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Forward the input text to the engine after an edit
    pub(super) fn input_changed(&mut self) {
        let text = self.query().to_string();
        self.engine.on_input_change(&text);
    }
}
