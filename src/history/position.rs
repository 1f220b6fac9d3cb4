//! Scroll offset pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A horizontal/vertical scroll offset pair.
///
/// Positions have no identity of their own; two positions are equal when both
/// offsets are equal. They serialize as a two element array `[x, y]`, which is
/// the layout used by the durable frame store.
///
/// # Examples
///
/// ```
/// use scrollquill::history::Position;
///
/// let pos = Position::new(4, 120);
/// assert_eq!(pos.to_string(), "(4, 120)");
/// assert_eq!(serde_json::to_string(&pos).unwrap(), "[4,120]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Position {
    /// Horizontal offset
    pub x: i64,
    /// Vertical offset
    pub y: i64,
}

impl Position {
    /// Creates a position from its offsets.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The top-left corner of a document.
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i64, i64) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
