//! Document view rendering.

use crate::document::{Document, Viewport};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Renders the part of `document` that `viewport` currently shows.
pub fn render_document_view(
    f: &mut Frame,
    area: Rect,
    document: &Document,
    viewport: &Viewport,
    colors: &ThemeColors,
) {
    let lines: Vec<Line> = document
        .lines()
        .iter()
        .skip(viewport.offset_y())
        .take(area.height as usize)
        .map(|line| {
            let visible: String = line
                .chars()
                .skip(viewport.offset_x())
                .take(area.width as usize)
                .collect();
            Line::from(visible)
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
