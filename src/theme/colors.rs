//! Color definitions for scrollquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the scrollquill terminal UI.

use ratatui::style::Color;

/// Defines all colors used in a scrollquill theme.
///
/// # Examples
///
/// ```
/// use scrollquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Document colors
    /// Main background color.
    pub background: Color,
    /// Main text color.
    pub foreground: Color,

    // History bar colors
    /// Background of the history bar.
    pub bar_bg: Color,
    /// Text of history bar entries.
    pub bar_fg: Color,
    /// Background of the entry at the cycle index.
    pub bar_current_bg: Color,
    /// Text of the entry at the cycle index.
    pub bar_current_fg: Color,

    // Status line colors
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the palette adapts to the terminal's own scheme.
    ///
    /// ```
    /// use scrollquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,

            bar_bg: Color::Reset,
            bar_fg: Color::DarkGray,
            bar_current_bg: Color::LightBlue,
            bar_current_fg: Color::Black,

            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),

            bar_bg: Color::Rgb(240, 240, 240),
            bar_fg: Color::Rgb(120, 120, 120),
            bar_current_bg: Color::Rgb(64, 120, 242),
            bar_current_fg: Color::Rgb(250, 250, 250),

            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),

            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
        }
    }

    /// Returns the gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),

            bar_bg: Color::Rgb(50, 48, 47),
            bar_fg: Color::Rgb(146, 131, 116),
            bar_current_bg: Color::Rgb(250, 189, 47),
            bar_current_fg: Color::Rgb(40, 40, 40),

            status_line_bg: Color::Rgb(80, 73, 69),
            status_line_fg: Color::Rgb(235, 219, 178),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the nord color scheme.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),

            bar_bg: Color::Rgb(59, 66, 82),
            bar_fg: Color::Rgb(129, 161, 193),
            bar_current_bg: Color::Rgb(136, 192, 208),
            bar_current_fg: Color::Rgb(46, 52, 64),

            status_line_bg: Color::Rgb(76, 86, 106),
            status_line_fg: Color::Rgb(236, 239, 244),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }
}
