//! The clickable history bar.
//!
//! One entry per recorded frame, labelled with its `(x, y)` offsets, oldest on
//! the left. The entry at the cycle index is highlighted. The bar is laid out
//! from scratch on every render and the resulting click areas are handed back
//! to the caller.

use crate::app::BarSlot;
use crate::history::Position;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Label drawn for a frame, e.g. ` (0, 120) `.
pub fn frame_label(pos: &Position) -> String {
    format!(" {} ", pos)
}

/// Lays out one slot per frame inside `area`.
///
/// Slots are separated by one blank cell. When not every frame fits, the
/// oldest frames are left out so the newest ones stay visible.
pub fn layout_bar(frames: &[Position], area: Rect) -> Vec<BarSlot> {
    let widths: Vec<u16> = frames
        .iter()
        .map(|pos| frame_label(pos).chars().count() as u16)
        .collect();

    let mut first = frames.len();
    let mut used: u16 = 0;
    for (index, width) in widths.iter().enumerate().rev() {
        let needed = if used == 0 { *width } else { width + 1 };
        if used.saturating_add(needed) > area.width {
            break;
        }
        used += needed;
        first = index;
    }

    let mut slots = Vec::with_capacity(frames.len() - first);
    let mut x = area.x;
    for index in first..frames.len() {
        slots.push(BarSlot {
            area: Rect::new(x, area.y, widths[index], 1),
            index,
        });
        x += widths[index] + 1;
    }
    slots
}

/// Renders the bar and returns the click areas of its entries.
pub fn render_history_bar(
    f: &mut Frame,
    area: Rect,
    frames: &[Position],
    cycle_index: Option<usize>,
    colors: &ThemeColors,
) -> Vec<BarSlot> {
    let slots = layout_bar(frames, area);

    let normal = Style::default().bg(colors.bar_bg).fg(colors.bar_fg);
    let current = Style::default()
        .bg(colors.bar_current_bg)
        .fg(colors.bar_current_fg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(slots.len() * 2);
    for (n, slot) in slots.iter().enumerate() {
        if n > 0 {
            spans.push(Span::styled(" ", normal));
        }
        let style = if Some(slot.index) == cycle_index {
            current
        } else {
            normal
        };
        spans.push(Span::styled(frame_label(&frames[slot.index]), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(normal), area);
    slots
}
