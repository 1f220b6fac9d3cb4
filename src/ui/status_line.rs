//! Status line widget for displaying pager state.
//!
//! The status line shows:
//! - Filename (or "[stdin]" when the document was piped in)
//! - Current scroll offsets
//! - Position within history (frame i/n)
//! - Storage backend
//!
//! Example status line: `notes.txt | (0, 120)            frame 3/7 | memory`

use crate::app::AppState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Formats the history position, e.g. `frame 3/7` (1-based) or `no history`.
pub fn history_indicator(state: &AppState) -> String {
    let engine = state.engine();
    match engine.cycle_index() {
        Some(index) => format!("frame {}/{}", index + 1, engine.frames().len()),
        None if engine.frames().is_empty() => "no history".to_string(),
        None => format!("frame -/{}", engine.frames().len()),
    }
}

/// Renders the status line.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &AppState, colors: &ThemeColors) {
    let filename = state.filename().unwrap_or("[stdin]");
    let left = format!(" {} | {}", filename, state.viewport().position());
    let right = format!(
        "{} | {} ",
        history_indicator(state),
        state.engine().store().backend_name()
    );

    let width = area.width as usize;
    let used = left.chars().count() + right.chars().count();
    let padding = " ".repeat(width.saturating_sub(used));

    let style = Style::default()
        .bg(colors.status_line_bg)
        .fg(colors.status_line_fg);
    let line = Line::from(vec![
        Span::styled(left, style),
        Span::styled(padding, style),
        Span::styled(right, style),
    ]);

    f.render_widget(Paragraph::new(line).style(style), area);
}
