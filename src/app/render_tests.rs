//! Tests for app rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::engine::EngineBuilder;
use crate::item::SuggestionItem;
use crate::test_utils::test_helpers::{ScriptedSource, item, test_app, test_app_with_history};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 12;

fn render_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

fn cities() -> Vec<SuggestionItem> {
    vec![
        item(1, "Paris").with_description("France"),
        item(2, "Porto").with_description("Portugal"),
        item(3, "Oslo"),
    ]
}

#[test]
fn test_open_list_shows_candidates() {
    let mut app = test_app(cities());
    type_text(&mut app, "p");

    let output = render_to_string(&mut app);

    assert!(output.contains("Paris"));
    assert!(output.contains("Porto"));
    assert!(!output.contains("Oslo"));
    assert!(output.contains("France"));
}

#[test]
fn test_selected_row_is_marked() {
    let mut app = test_app(cities());
    type_text(&mut app, "p");
    app.handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));

    let output = render_to_string(&mut app);

    let selected_line = output.lines().find(|l| l.contains('►')).unwrap();
    assert!(selected_line.contains("Paris"));
}

#[test]
fn test_closed_list_is_empty() {
    let mut app = test_app(cities());
    type_text(&mut app, "p");
    app.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

    let output = render_to_string(&mut app);

    assert!(!output.contains("Paris"));
    assert!(output.contains("Suggestions"));
}

#[test]
fn test_no_results_message() {
    let mut app = test_app(cities());
    type_text(&mut app, "zzz");

    let output = render_to_string(&mut app);

    assert!(output.contains("No results"));
}

#[test]
fn test_history_marker() {
    let mut app = test_app_with_history(cities(), vec![item(9, "Berlin")]);

    let output = render_to_string(&mut app);

    let history_line = output.lines().find(|l| l.contains("Berlin")).unwrap();
    assert!(history_line.contains('↺'));
}

#[test]
fn test_help_line_by_default() {
    let mut app = test_app(cities());

    let output = render_to_string(&mut app);

    assert!(output.contains("Enter select"));
}

#[test]
fn test_warning_replaces_help_line() {
    let mut app = test_app(cities()).with_warning(Some("bad config".to_string()));

    let output = render_to_string(&mut app);

    assert!(output.contains("bad config"));
    assert!(!output.contains("Enter select"));
}

#[tokio::test(start_paused = true)]
async fn test_error_message_in_status_line() {
    let engine = EngineBuilder::new()
        .fetch_source(ScriptedSource::new().failing("x"))
        .build()
        .unwrap();
    let mut app = App::new(engine);
    type_text(&mut app, "x");
    assert!(render_to_string(&mut app).contains("Loading..."));

    app.engine.settle().await;
    let output = render_to_string(&mut app);

    assert!(output.contains("Failed to fetch suggestions"));
}
