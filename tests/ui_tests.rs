use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use scrollquill::app::{AppState, MessageLevel};
use scrollquill::document::Document;
use scrollquill::history::{Debouncer, HistoryEngine, NavigationQueue, PositionStore};
use scrollquill::theme::get_builtin_theme;
use scrollquill::ui::status_line::history_indicator;
use scrollquill::ui::UI;
use std::time::Instant;

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn state() -> AppState {
    let text: Vec<String> = (0..100).map(|i| format!("row {}", i)).collect();
    let engine = HistoryEngine::new(PositionStore::in_memory(10), NavigationQueue::new());
    let mut state = AppState::new(
        Document::from_text(&text.join("\n")),
        engine,
        Debouncer::from_millis(0),
    );
    state.set_filename("rows.txt".to_string());
    state
}

#[test]
fn test_history_indicator() {
    let mut state = state();
    assert_eq!(history_indicator(&state), "no history");

    state.record_initial_position();
    assert_eq!(history_indicator(&state), "frame 1/1");
}

#[test]
fn test_screen_layout() {
    let ui = UI::new(get_builtin_theme("default-dark").unwrap());
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    let mut state = state();
    ui.render(&mut terminal, &mut state).unwrap();
    state.record_initial_position();
    state.scroll_by(0, 2, Instant::now());
    state.set_message("hello".to_string(), MessageLevel::Info);

    ui.render(&mut terminal, &mut state).unwrap();
    let buffer = terminal.backend().buffer();

    let bar = row_text(buffer, 0);
    assert!(bar.starts_with(" (0, 0)   (0, 2) "), "bar was {:?}", bar);
    assert!(row_text(buffer, 1).starts_with("row 2"));

    let status = row_text(buffer, 8);
    assert!(status.contains("rows.txt | (0, 2)"));
    assert!(status.contains("frame 2/2 | memory"));

    assert!(row_text(buffer, 9).starts_with("hello"));
}

#[test]
fn test_horizontal_offset_is_applied() {
    let ui = UI::new(get_builtin_theme("default-dark").unwrap());
    let mut terminal = Terminal::new(TestBackend::new(3, 10)).unwrap();
    let mut state = state();
    ui.render(&mut terminal, &mut state).unwrap();
    state.scroll_by(2, 0, Instant::now());

    ui.render(&mut terminal, &mut state).unwrap();
    let buffer = terminal.backend().buffer();

    assert_eq!(row_text(buffer, 1), "w 0");
}
