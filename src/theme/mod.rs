//! Theme system for scrollquill.
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI colors, follows the terminal palette
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme
//! - `"nord"`: Arctic, north-bluish palette
//!
//! # Examples
//!
//! ```
//! use scrollquill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("nord").unwrap();
//! assert_eq!(theme.name, "nord");
//! assert!(get_builtin_theme("nonexistent").is_none());
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the scrollquill terminal UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is unknown.
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        _ => return None,
    };

    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns the names of all built-in themes, sorted.
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
    ];
    themes.sort();
    themes
}
