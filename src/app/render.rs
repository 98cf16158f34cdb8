use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::engine::CandidateOrigin;
use crate::item::SuggestionItem;
use crate::matcher::highlight_match;

const HELP_TEXT: &str = "↑↓ navigate  Enter select  Ctrl+D forget  Ctrl+U clear  Esc close";
const NO_RESULTS: &str = "No results";
const LOADING: &str = "Loading...";
const DESCRIPTION_GAP: usize = 2;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Query input
            Constraint::Min(3),    // Candidate list
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

        self.render_input_field(frame, layout[0]);
        self.render_candidates(frame, layout[1]);
        self.render_status_line(frame, layout[2]);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.engine.is_open() {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Query ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
    }

    fn render_candidates(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::DarkGray));

        if !self.engine.is_open() {
            frame.render_widget(block, area);
            return;
        }

        let candidates = self.engine.candidates();
        if candidates.is_empty() {
            // Nothing to say while a fetch may still fill the list
            let message = if self.engine.query().is_empty() || self.engine.is_loading() {
                ""
            } else {
                NO_RESULTS
            };
            let content = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(content, area);
            return;
        }

        let label_width = candidates
            .iter()
            .map(|c| c.label.width())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let selected = self.engine.selected_index() == Some(i);
                ListItem::new(self.candidate_line(candidate, selected, label_width))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn candidate_line(
        &self,
        candidate: &SuggestionItem,
        selected: bool,
        label_width: usize,
    ) -> Line<'static> {
        let (marker, marker_color) = match self.engine.candidate_origin(candidate) {
            CandidateOrigin::History => ("↺ ", Color::Magenta),
            CandidateOrigin::Default => ("★ ", Color::Yellow),
            CandidateOrigin::Suggestion => ("  ", Color::White),
        };

        let base = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let matched = if selected {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::styled(if selected { "► " } else { "  " }, base),
            Span::styled(marker, if selected { base } else { base.fg(marker_color) }),
        ];

        for segment in highlight_match(&candidate.label, self.engine.query()) {
            let style = if segment.matched { matched } else { base };
            spans.push(Span::styled(segment.text, style));
        }

        if let Some(description) = candidate.description() {
            let padding = label_width.saturating_sub(candidate.label.width()) + DESCRIPTION_GAP;
            let style = if selected {
                base
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(
                format!("{}{}", " ".repeat(padding), description),
                style,
            ));
        }

        Line::from(spans)
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let (text, style) = if let Some(message) = self.engine.error_message() {
            (message, Style::default().fg(Color::Red))
        } else if self.engine.is_loading() {
            (LOADING.to_string(), Style::default().fg(Color::Yellow))
        } else if let Some(warning) = &self.warning {
            (warning.clone(), Style::default().fg(Color::Yellow))
        } else {
            (HELP_TEXT.to_string(), Style::default().fg(Color::DarkGray))
        };

        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
