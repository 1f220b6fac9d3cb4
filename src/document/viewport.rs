//! Viewport scroll state.

use super::Document;
use crate::history::Position;

/// The visible window onto a document.
///
/// Offsets are kept within the document: the bottom line can reach the
/// bottom of the viewport but never scroll past it, and likewise for the
/// longest line horizontally. Every mutating method reports whether the
/// offsets actually changed, which is what counts as "a scroll happened".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    offset_x: usize,
    offset_y: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offsets as a history position.
    pub fn position(&self) -> Position {
        Position::new(self.offset_x as i64, self.offset_y as i64)
    }

    pub fn offset_x(&self) -> usize {
        self.offset_x
    }

    pub fn offset_y(&self) -> usize {
        self.offset_y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Updates the visible area size, e.g. after a terminal resize.
    ///
    /// Offsets are not touched here; they are clamped on the next scroll.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    fn max_x(&self, doc: &Document) -> usize {
        doc.max_width().saturating_sub(self.width)
    }

    fn max_y(&self, doc: &Document) -> usize {
        doc.line_count().saturating_sub(self.height)
    }

    /// Scrolls by a relative amount. Returns true if the offsets changed.
    pub fn scroll_by(&mut self, dx: i64, dy: i64, doc: &Document) -> bool {
        let target = Position::new(
            (self.offset_x as i64).saturating_add(dx),
            (self.offset_y as i64).saturating_add(dy),
        );
        self.scroll_to(target, doc)
    }

    /// Scrolls to `pos`, clamped to the document. Returns true if the offsets changed.
    pub fn scroll_to(&mut self, pos: Position, doc: &Document) -> bool {
        let x = clamp_offset(pos.x, self.max_x(doc));
        let y = clamp_offset(pos.y, self.max_y(doc));
        let changed = x != self.offset_x || y != self.offset_y;
        self.offset_x = x;
        self.offset_y = y;
        changed
    }

    pub fn scroll_to_top(&mut self, doc: &Document) -> bool {
        self.scroll_to(Position::new(self.offset_x as i64, 0), doc)
    }

    pub fn scroll_to_bottom(&mut self, doc: &Document) -> bool {
        let bottom = self.max_y(doc) as i64;
        self.scroll_to(Position::new(self.offset_x as i64, bottom), doc)
    }

    /// Scrolls by whole pages; negative pages scroll up.
    pub fn scroll_pages(&mut self, pages: i64, doc: &Document) -> bool {
        let page = self.height.max(1) as i64;
        self.scroll_by(0, pages.saturating_mul(page), doc)
    }
}

fn clamp_offset(value: i64, max: usize) -> usize {
    if value <= 0 {
        0
    } else {
        (value as u64).min(max as u64) as usize
    }
}
