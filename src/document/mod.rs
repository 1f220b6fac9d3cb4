//! The document being paged and the viewport scrolled over it.
//!
//! # Modules
//!
//! - `viewport`: Scroll offsets and visible area, clamped to the document

pub mod viewport;

pub use viewport::Viewport;

/// Tabs are expanded so column offsets match what the terminal shows.
const TAB_WIDTH: usize = 4;

/// A read-only text document split into lines.
///
/// # Examples
///
/// ```
/// use scrollquill::document::Document;
///
/// let doc = Document::from_text("first\n\tindented\n");
/// assert_eq!(doc.line_count(), 2);
/// assert_eq!(doc.line(1), Some("    indented"));
/// assert_eq!(doc.max_width(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    max_width: usize,
}

impl Document {
    /// Splits `text` into lines, expanding tabs.
    pub fn from_text(text: &str) -> Self {
        let tab = " ".repeat(TAB_WIDTH);
        let lines: Vec<String> = text.lines().map(|line| line.replace('\t', &tab)).collect();
        let max_width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Self { lines, max_width }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width in characters of the longest line.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
