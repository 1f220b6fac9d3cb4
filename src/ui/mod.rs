//! UI module for the scrollquill terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal
//! interface, including layout management and widget composition.

pub mod document_view;
pub mod history_bar;
pub mod message_area;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::app::AppState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of four areas, top to bottom:
/// - History bar: one clickable entry per recorded frame (optional)
/// - Document view: the visible part of the document
/// - Status line: filename, offsets, history position and storage
/// - Message area: info, warnings and errors
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use scrollquill::ui::UI;
    /// use scrollquill::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("default-dark").unwrap();
    /// let ui = UI::new(theme);
    /// assert_eq!(ui.theme_name(), "default-dark");
    /// ```
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// Also resizes the viewport to the document area and replaces the
    /// history bar click areas in `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()> {
        terminal.draw(|f| {
            let bar_height = if state.show_bar() { 1 } else { 0 };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(bar_height), // History bar
                    Constraint::Min(1),             // Document view
                    Constraint::Length(1),          // Status line
                    Constraint::Length(1),          // Message area
                ])
                .split(f.area());

            state.resize_viewport(chunks[1].width as usize, chunks[1].height as usize);

            if state.show_bar() {
                let slots = history_bar::render_history_bar(
                    f,
                    chunks[0],
                    state.engine().frames(),
                    state.engine().cycle_index(),
                    &self.theme.colors,
                );
                state.set_bar_slots(slots);
            }

            document_view::render_document_view(
                f,
                chunks[1],
                state.document(),
                state.viewport(),
                &self.theme.colors,
            );

            status_line::render_status_line(f, chunks[2], state, &self.theme.colors);
            message_area::render_message_area(f, chunks[3], state, &self.theme.colors);
        })?;

        Ok(())
    }
}
