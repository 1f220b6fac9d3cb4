//! Application state for the pager.
//!
//! Every user scroll is a notification that passes through the debouncer
//! before reaching [`HistoryEngine::record`]. Navigations the engine issues
//! are queued and applied to the viewport here; their notification goes
//! straight to the engine so it always consumes the one-shot suppression.

use crate::document::{Document, Viewport};
use crate::history::{Debouncer, HistoryEngine, HistoryError, NavigationQueue, Position};
use log::{info, warn};
use ratatui::layout::Rect;
use std::time::Instant;

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A message displayed in the message area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Screen area of one history bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSlot {
    pub area: Rect,
    /// Frame index the entry jumps to
    pub index: usize,
}

/// Everything the pager needs between two events.
pub struct AppState {
    document: Document,
    filename: Option<String>,
    viewport: Viewport,
    engine: HistoryEngine<NavigationQueue>,
    debouncer: Debouncer,
    message: Option<Message>,
    show_bar: bool,
    enable_mouse: bool,
    scroll_step: usize,
    bar_slots: Vec<BarSlot>,
}

impl AppState {
    pub fn new(
        document: Document,
        engine: HistoryEngine<NavigationQueue>,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            document,
            filename: None,
            viewport: Viewport::new(),
            engine,
            debouncer,
            message: None,
            show_bar: true,
            enable_mouse: true,
            scroll_step: 3,
            bar_slots: Vec::new(),
        }
    }

    /// Records the position the document opened at, bypassing the debouncer.
    pub fn record_initial_position(&mut self) {
        let pos = self.viewport.position();
        if let Err(e) = self.engine.record(pos) {
            self.report_store_error(e);
        }
    }

    /// Handles a scroll notification at `now`.
    ///
    /// Notifications inside the debounce window are dropped.
    pub fn notify_scroll(&mut self, now: Instant) {
        let pos = self.viewport.position();
        if let Some(Err(e)) = self.debouncer.trigger_at(now, || self.engine.record(pos)) {
            self.report_store_error(e);
        }
    }

    /// Scrolls the viewport by a relative amount.
    pub fn scroll_by(&mut self, dx: i64, dy: i64, now: Instant) {
        if self.viewport.scroll_by(dx, dy, &self.document) {
            self.notify_scroll(now);
        }
    }

    /// Scrolls the viewport by whole pages.
    pub fn scroll_pages(&mut self, pages: i64, now: Instant) {
        if self.viewport.scroll_pages(pages, &self.document) {
            self.notify_scroll(now);
        }
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        if self.viewport.scroll_to_top(&self.document) {
            self.notify_scroll(now);
        }
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        if self.viewport.scroll_to_bottom(&self.document) {
            self.notify_scroll(now);
        }
    }

    /// Steps back through history. Returns the position navigated to.
    pub fn cycle_backward(&mut self) -> Option<Position> {
        let target = self.engine.cycle_backward();
        self.apply_navigation();
        target
    }

    /// Steps forward through history. Returns the position navigated to.
    pub fn cycle_forward(&mut self) -> Option<Position> {
        let target = self.engine.cycle_forward();
        self.apply_navigation();
        target
    }

    /// Jumps to frame `index`, reporting stale indices in the message area.
    pub fn jump_to(&mut self, index: usize) -> Result<Position, HistoryError> {
        match self.engine.jump_to(index) {
            Ok(pos) => {
                self.apply_navigation();
                Ok(pos)
            }
            Err(e) => {
                warn!("history jump failed: {}", e);
                self.set_message(
                    "History temporarily unavailable".to_string(),
                    MessageLevel::Warning,
                );
                Err(e)
            }
        }
    }

    /// Handles a click at screen cell (`column`, `row`).
    ///
    /// Returns true if the click hit a history bar entry.
    pub fn click_at(&mut self, column: u16, row: u16) -> bool {
        let hit = self.bar_slots.iter().find(|slot| {
            let area = slot.area;
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        });

        match hit.map(|slot| slot.index) {
            Some(index) => {
                // The error is already surfaced in the message area.
                let _ = self.jump_to(index);
                true
            }
            None => false,
        }
    }

    /// Moves the viewport to every queued navigation target.
    ///
    /// The resulting notification bypasses the debouncer and is delivered
    /// even when the viewport was already there, so it never outlives the
    /// navigation that armed it.
    fn apply_navigation(&mut self) {
        for pos in self.engine.navigator_mut().drain() {
            self.viewport.scroll_to(pos, &self.document);
            if let Err(e) = self.engine.record(self.viewport.position()) {
                self.report_store_error(e);
            }
        }
    }

    fn report_store_error(&mut self, e: HistoryError) {
        warn!("frame store error: {}", e);
        self.set_message(
            format!("History not saved: {}", e),
            MessageLevel::Error,
        );
    }

    /// Called once at startup with the outcome of restoring saved frames.
    pub fn report_restore(&mut self, result: Result<usize, HistoryError>) {
        match result {
            Ok(0) => {}
            Ok(count) => {
                info!("restored {} frames", count);
                self.set_message(
                    format!("Restored {} history frames", count),
                    MessageLevel::Info,
                );
            }
            Err(e) => {
                warn!("starting with empty history: {}", e);
                self.set_message(
                    format!("Starting with empty history: {}", e),
                    MessageLevel::Warning,
                );
            }
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Updates the visible area size.
    pub fn resize_viewport(&mut self, width: usize, height: usize) {
        self.viewport.resize(width, height);
    }

    pub fn engine(&self) -> &HistoryEngine<NavigationQueue> {
        &self.engine
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn show_bar(&self) -> bool {
        self.show_bar
    }

    pub fn set_show_bar(&mut self, show: bool) {
        self.show_bar = show;
        if !show {
            self.bar_slots.clear();
        }
    }

    pub fn toggle_bar(&mut self) {
        self.set_show_bar(!self.show_bar);
    }

    pub fn enable_mouse(&self) -> bool {
        self.enable_mouse
    }

    pub fn set_enable_mouse(&mut self, enable: bool) {
        self.enable_mouse = enable;
    }

    pub fn scroll_step(&self) -> usize {
        self.scroll_step
    }

    pub fn set_scroll_step(&mut self, step: usize) {
        self.scroll_step = step.max(1);
    }

    pub fn bar_slots(&self) -> &[BarSlot] {
        &self.bar_slots
    }

    /// Replaces the clickable bar areas; called on every render.
    pub fn set_bar_slots(&mut self, slots: Vec<BarSlot>) {
        self.bar_slots = slots;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PositionStore;
    use std::time::Duration;

    fn state(window_ms: u64) -> AppState {
        let text: Vec<String> = (0..200).map(|i| format!("line {}", i)).collect();
        let engine = HistoryEngine::new(PositionStore::in_memory(10), NavigationQueue::new());
        let mut state = AppState::new(
            Document::from_text(&text.join("\n")),
            engine,
            Debouncer::from_millis(window_ms),
        );
        state.resize_viewport(40, 10);
        state
    }

    #[test]
    fn test_burst_of_scrolls_records_first_position_only() {
        let mut state = state(1000);
        let start = Instant::now();

        state.scroll_by(0, 1, start);
        state.scroll_by(0, 1, start + Duration::from_millis(100));
        state.scroll_by(0, 1, start + Duration::from_millis(200));

        assert_eq!(state.engine().frames(), &[Position::new(0, 1)]);
    }

    #[test]
    fn test_stale_bar_index_sets_warning() {
        let mut state = state(0);
        state.record_initial_position();
        state.set_bar_slots(vec![BarSlot {
            area: Rect::new(0, 0, 8, 1),
            index: 5,
        }]);

        assert!(state.click_at(2, 0));
        let message = state.message().unwrap();
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(state.viewport().position(), Position::origin());
    }

    #[test]
    fn test_click_outside_bar_is_ignored() {
        let mut state = state(0);
        state.set_bar_slots(vec![BarSlot {
            area: Rect::new(0, 0, 8, 1),
            index: 0,
        }]);
        assert!(!state.click_at(9, 0));
        assert!(!state.click_at(2, 1));
    }
}
