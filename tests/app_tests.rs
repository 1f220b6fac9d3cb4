//! End-to-end tests: terminal events through the input handler into history.

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use scrollquill::app::AppState;
use scrollquill::document::Document;
use scrollquill::history::{Debouncer, HistoryEngine, NavigationQueue, Position, PositionStore};
use scrollquill::input::{InputHandler, KeyMap};
use scrollquill::theme::get_builtin_theme;
use scrollquill::ui::UI;
use std::time::{Duration, Instant};
use termion::event::{Event, Key, MouseButton, MouseEvent};

fn document() -> Document {
    let text: Vec<String> = (0..500).map(|i| format!("line {:>3} of the document", i)).collect();
    Document::from_text(&text.join("\n"))
}

fn setup(window_ms: u64) -> (AppState, InputHandler) {
    let engine = HistoryEngine::new(PositionStore::in_memory(10), NavigationQueue::new());
    let mut state = AppState::new(document(), engine, Debouncer::from_millis(window_ms));
    state.resize_viewport(80, 20);
    state.record_initial_position();
    (state, InputHandler::new(KeyMap::default()))
}

fn press(handler: &mut InputHandler, state: &mut AppState, key: Key, at: Instant) -> bool {
    handler.handle_event_at(Event::Key(key), state, at).unwrap()
}

fn ms(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

#[test]
fn test_initial_position_is_recorded() {
    let (state, _) = setup(1000);
    assert_eq!(state.engine().frames(), &[Position::origin()]);
    assert_eq!(state.engine().cycle_index(), Some(0));
}

#[test]
fn test_back_and_forth_through_history() {
    let (mut state, mut handler) = setup(1000);
    let start = Instant::now();

    for _ in 0..10 {
        press(&mut handler, &mut state, Key::Char('j'), ms(start, 2000));
    }
    press(&mut handler, &mut state, Key::Char('G'), ms(start, 4000));
    assert_eq!(
        state.engine().frames(),
        &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 480)]
    );

    press(&mut handler, &mut state, Key::Left, ms(start, 6000));
    assert_eq!(state.viewport().position(), Position::new(0, 1));

    press(&mut handler, &mut state, Key::Left, ms(start, 8000));
    assert_eq!(state.viewport().position(), Position::new(0, 0));
    assert_eq!(state.engine().cycle_index(), Some(0));

    press(&mut handler, &mut state, Key::Right, ms(start, 10000));
    assert_eq!(state.viewport().position(), Position::new(0, 1));

    // Navigation echoes never became frames.
    assert_eq!(state.engine().frames().len(), 3);
    assert!(state.engine().should_record());
}

#[test]
fn test_cycling_at_edge_reports_message() {
    let (mut state, mut handler) = setup(1000);
    press(&mut handler, &mut state, Key::Left, Instant::now());

    assert_eq!(
        state.message().unwrap().text,
        "At oldest frame, right goes forward"
    );
    assert_eq!(state.viewport().position(), Position::origin());
}

#[test]
fn test_navigation_inside_window_does_not_swallow_next_scroll() {
    let (mut state, mut handler) = setup(1000);
    let start = Instant::now();

    press(&mut handler, &mut state, Key::Char(' '), ms(start, 2000));
    // Cycling inside the debounce window still consumes its own echo.
    press(&mut handler, &mut state, Key::Left, ms(start, 2500));
    assert!(state.engine().should_record());
    assert_eq!(state.engine().frames().len(), 2);

    press(&mut handler, &mut state, Key::Char('j'), ms(start, 5000));
    assert_eq!(state.engine().frames().len(), 3);
    assert_eq!(state.engine().frames()[2], Position::new(0, 1));
}

#[test]
fn test_navigation_to_visible_frame_does_not_swallow_next_scroll() {
    let (mut state, mut handler) = setup(1000);
    let start = Instant::now();

    press(&mut handler, &mut state, Key::Char(' '), ms(start, 2000));
    // Scrolling back home inside the window is dropped, so the viewport is
    // already at the frame cycling back targets.
    press(&mut handler, &mut state, Key::Char('g'), ms(start, 2100));
    assert_eq!(state.viewport().position(), Position::origin());
    assert_eq!(
        state.engine().frames(),
        &[Position::origin(), Position::new(0, 20)]
    );

    press(&mut handler, &mut state, Key::Left, ms(start, 5000));
    assert_eq!(state.viewport().position(), Position::origin());
    assert!(state.engine().should_record());

    for _ in 0..50 {
        press(&mut handler, &mut state, Key::Char('j'), ms(start, 60000));
    }
    assert_eq!(
        state.engine().frames(),
        &[Position::origin(), Position::new(0, 20), Position::new(0, 1)]
    );
}

#[test]
fn test_edge_messages_name_bound_keys() {
    let engine = HistoryEngine::new(PositionStore::in_memory(10), NavigationQueue::new());
    let mut state = AppState::new(document(), engine, Debouncer::from_millis(0));
    state.resize_viewport(80, 20);
    state.record_initial_position();
    let mut handler = InputHandler::new(KeyMap::from_names("ctrl-o", "ctrl-i").unwrap());
    let now = Instant::now();

    press(&mut handler, &mut state, Key::Ctrl('o'), now);
    assert_eq!(
        state.message().unwrap().text,
        "At oldest frame, ctrl-i goes forward"
    );

    press(&mut handler, &mut state, Key::Ctrl('i'), now);
    assert_eq!(
        state.message().unwrap().text,
        "At newest frame, ctrl-o goes back"
    );
}

#[test]
fn test_record_after_cycling_back_starts_from_newest() {
    let (mut state, mut handler) = setup(0);
    let now = Instant::now();

    press(&mut handler, &mut state, Key::Char(' '), now);
    press(&mut handler, &mut state, Key::Char(' '), now);
    press(&mut handler, &mut state, Key::Left, now);
    press(&mut handler, &mut state, Key::Char('j'), now);

    let frames = state.engine().frames();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[3], Position::new(0, 21));
    assert_eq!(state.engine().cycle_index(), Some(3));
}

#[test]
fn test_mouse_wheel_scrolls_by_step() {
    let (mut state, mut handler) = setup(0);
    state.set_scroll_step(5);

    handler
        .handle_event_at(
            Event::Mouse(MouseEvent::Press(MouseButton::WheelDown, 1, 1)),
            &mut state,
            Instant::now(),
        )
        .unwrap();

    assert_eq!(state.viewport().position(), Position::new(0, 5));
}

#[test]
fn test_mouse_disabled_ignores_wheel() {
    let (mut state, mut handler) = setup(0);
    state.set_enable_mouse(false);

    handler
        .handle_event_at(
            Event::Mouse(MouseEvent::Press(MouseButton::WheelDown, 1, 1)),
            &mut state,
            Instant::now(),
        )
        .unwrap();

    assert_eq!(state.viewport().position(), Position::origin());
}

#[test]
fn test_click_on_history_bar_jumps() {
    let (mut state, mut handler) = setup(0);
    let ui = UI::new(get_builtin_theme("default-dark").unwrap());
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let now = Instant::now();

    press(&mut handler, &mut state, Key::Char('G'), now);
    ui.render(&mut terminal, &mut state).unwrap();

    let first = state.bar_slots()[0];
    assert_eq!(first.index, 0);

    // termion mouse coordinates are 1-based
    handler
        .handle_event_at(
            Event::Mouse(MouseEvent::Press(
                MouseButton::Left,
                first.area.x + 1,
                first.area.y + 1,
            )),
            &mut state,
            now,
        )
        .unwrap();

    assert_eq!(state.viewport().position(), Position::origin());
    assert_eq!(state.engine().cycle_index(), Some(0));
    assert_eq!(state.engine().frames().len(), 2);
}

#[test]
fn test_toggle_bar_and_quit() {
    let (mut state, mut handler) = setup(0);
    let now = Instant::now();

    assert!(!press(&mut handler, &mut state, Key::Char('t'), now));
    assert!(!state.show_bar());
    assert!(press(&mut handler, &mut state, Key::Char('q'), now));
}
