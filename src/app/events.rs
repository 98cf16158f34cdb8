use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;
use crate::engine::{CandidateOrigin, NavKey};

impl App {
    /// Wait up to `timeout` for one terminal event and handle it
    ///
    /// Returns false when no event arrived.
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            Event::FocusGained => self.engine.on_focus(),
            Event::FocusLost => self.engine.on_blur(),
            _ => {}
        }
        Ok(true)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => {
                self.engine.clear();
                self.replace_query_with("");
            }
            KeyCode::Char('d') if ctrl => self.forget_selected(),
            KeyCode::Esc if !self.engine.is_open() => self.should_quit = true,
            KeyCode::Down if !self.engine.is_open() => self.engine.on_focus(),
            KeyCode::Up | KeyCode::Down | KeyCode::Esc => {
                self.engine.on_key_down(nav_key(key.code));
            }
            KeyCode::Enter => {
                if let Some(item) = self.engine.commit() {
                    self.replace_query_with(&item.label);
                }
            }
            _ => {
                if self.textarea.input(key) {
                    self.input_changed();
                }
            }
        }
    }

    /// Insert pasted text as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        let line = text.replace(['\r', '\n'], " ");
        if self.textarea.insert_str(line) {
            self.input_changed();
        }
    }

    /// Remove the highlighted candidate from history, if it came from there
    fn forget_selected(&mut self) {
        let Some(item) = self.engine.selected_item() else {
            return;
        };
        if self.engine.candidate_origin(&item) == CandidateOrigin::History {
            log::debug!("Removing {} from history", item.id);
            self.engine.remove_from_history(&item.id);
        }
    }
}

fn nav_key(code: KeyCode) -> NavKey {
    match code {
        KeyCode::Up => NavKey::ArrowUp,
        KeyCode::Down => NavKey::ArrowDown,
        KeyCode::Esc => NavKey::Escape,
        _ => NavKey::Other,
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
