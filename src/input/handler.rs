//! Input event handler for polling and processing terminal events.

use super::keys::{key_name, map_key_event, InputEvent, KeyMap};
use crate::app::{AppState, MessageLevel};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::{Duration, Instant};
use termion::event::{Event, MouseButton, MouseEvent};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// Wraps the events iterator so its state survives across calls, which keeps
/// bursts of input (held keys, wheel spins) from losing bytes.
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin carried the document)
    Tty(Events<File>),
}

/// Translates terminal events into pager and history operations.
///
/// The handler owns no history state; it only forwards typed events into
/// [`AppState`].
pub struct InputHandler {
    events: EventSource,
    keymap: KeyMap,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
            keymap,
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty(keymap: KeyMap) -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
            keymap,
        })
    }

    /// Waits for the next terminal event.
    ///
    /// Returns `None` once the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the terminal fails.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        let next = match &mut self.events {
            EventSource::Stdin(events) => events.next(),
            EventSource::Tty(events) => events.next(),
        };

        match next {
            Some(event) => Ok(Some(event?)),
            None => Ok(None),
        }
    }

    /// Handles a terminal event at the current time.
    ///
    /// Returns `Ok(true)` if the pager should quit.
    pub fn handle_event(&mut self, event: Event, state: &mut AppState) -> Result<bool> {
        self.handle_event_at(event, state, Instant::now())
    }

    /// Handles a terminal event as if it happened at `now`.
    ///
    /// # Example
    ///
    /// ```
    /// use scrollquill::app::AppState;
    /// use scrollquill::document::Document;
    /// use scrollquill::history::{Debouncer, HistoryEngine, NavigationQueue, PositionStore};
    /// use scrollquill::input::{InputHandler, KeyMap};
    /// use std::time::Instant;
    /// use termion::event::{Event, Key};
    ///
    /// let engine = HistoryEngine::new(PositionStore::in_memory(10), NavigationQueue::new());
    /// let mut state = AppState::new(Document::from_text("a\nb"), engine, Debouncer::from_millis(0));
    /// let mut handler = InputHandler::new(KeyMap::default());
    ///
    /// let quit = handler
    ///     .handle_event_at(Event::Key(Key::Char('q')), &mut state, Instant::now())
    ///     .unwrap();
    /// assert!(quit);
    /// ```
    pub fn handle_event_at(
        &mut self,
        event: Event,
        state: &mut AppState,
        now: Instant,
    ) -> Result<bool> {
        if let Event::Mouse(mouse_event) = event {
            if state.enable_mouse() {
                self.handle_mouse(mouse_event, state, now);
            }
            return Ok(false);
        }

        match map_key_event(event, &self.keymap) {
            InputEvent::Quit => return Ok(true),
            InputEvent::CycleBackward => {
                if state.cycle_backward().is_none() {
                    state.set_message(
                        format!(
                            "At oldest frame, {} goes forward",
                            key_name(&self.keymap.forward)
                        ),
                        MessageLevel::Info,
                    );
                }
            }
            InputEvent::CycleForward => {
                if state.cycle_forward().is_none() {
                    state.set_message(
                        format!(
                            "At newest frame, {} goes back",
                            key_name(&self.keymap.backward)
                        ),
                        MessageLevel::Info,
                    );
                }
            }
            InputEvent::ScrollUp => state.scroll_by(0, -1, now),
            InputEvent::ScrollDown => state.scroll_by(0, 1, now),
            InputEvent::ScrollLeft => state.scroll_by(-1, 0, now),
            InputEvent::ScrollRight => state.scroll_by(1, 0, now),
            InputEvent::PageUp => state.scroll_pages(-1, now),
            InputEvent::PageDown => state.scroll_pages(1, now),
            InputEvent::Top => state.scroll_to_top(now),
            InputEvent::Bottom => state.scroll_to_bottom(now),
            InputEvent::ToggleBar => state.toggle_bar(),
            InputEvent::ClearMessage => state.clear_message(),
            InputEvent::Unknown => {}
        }

        Ok(false)
    }

    fn handle_mouse(&self, mouse_event: MouseEvent, state: &mut AppState, now: Instant) {
        let step = state.scroll_step() as i64;
        match mouse_event {
            MouseEvent::Press(MouseButton::WheelUp, _, _) => state.scroll_by(0, -step, now),
            MouseEvent::Press(MouseButton::WheelDown, _, _) => state.scroll_by(0, step, now),
            // termion reports 1-based cells
            MouseEvent::Press(MouseButton::Left, x, y) => {
                state.click_at(x.saturating_sub(1), y.saturating_sub(1));
            }
            _ => {}
        }
    }
}
