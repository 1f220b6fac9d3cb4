//! Configuration system for scrollquill.
//!
//! This module provides the configuration structure for scrollquill with sensible
//! defaults and support for serialization/deserialization via serde. Configuration
//! is loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use scrollquill::config::{Config, StorageMode};
//!
//! let config = Config::default();
//! assert_eq!(config.capacity, 10);
//! assert_eq!(config.debounce_ms, 1000);
//!
//! let custom = Config {
//!     capacity: 25,
//!     storage: StorageMode::File,
//!     ..Config::default()
//! };
//! assert_eq!(custom.backward_key, "left");
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where recorded frames are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Frames only live as long as the pager is open
    #[default]
    Memory,
    /// Frames are persisted to the store file and restored on the next run
    File,
}

/// Configuration for the scrollquill application.
///
/// # Fields
///
/// * `capacity` - Number of frames kept in history (default: 10)
/// * `debounce_ms` - Quiet window between two recorded frames (default: 1000)
/// * `backward_key` - Key that steps back through history (default: "left")
/// * `forward_key` - Key that steps forward through history (default: "right")
/// * `storage` - "memory" or "file" (default: "memory")
/// * `storage_path` - Store file used by "file" storage (default: data dir)
/// * `show_bar` - Show the clickable history bar (default: true)
/// * `enable_mouse` - Mouse wheel scrolling and bar clicks (default: true)
/// * `scroll_step` - Lines per mouse wheel notch (default: 3)
/// * `theme` - Color scheme name (default: "default-dark")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of frames kept in history
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Quiet window in milliseconds between two recorded frames
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Key name that steps back through history
    #[serde(default = "default_backward_key")]
    pub backward_key: String,

    /// Key name that steps forward through history
    #[serde(default = "default_forward_key")]
    pub forward_key: String,

    /// Frame persistence backend
    #[serde(default)]
    pub storage: StorageMode,

    /// Store file for file storage
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Show the history bar above the document
    #[serde(default = "default_show_bar")]
    pub show_bar: bool,

    /// Enable mouse/trackpad scrolling and bar clicks
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,

    /// Lines scrolled per mouse wheel notch
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,

    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

/// Ten slots, frames 0 through 9.
fn default_capacity() -> usize {
    10
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_backward_key() -> String {
    "left".to_string()
}

fn default_forward_key() -> String {
    "right".to_string()
}

fn default_show_bar() -> bool {
    true
}

fn default_enable_mouse() -> bool {
    true
}

fn default_scroll_step() -> usize {
    3
}

fn default_theme() -> String {
    "default-dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            debounce_ms: default_debounce_ms(),
            backward_key: default_backward_key(),
            forward_key: default_forward_key(),
            storage: StorageMode::default(),
            storage_path: None,
            show_bar: default_show_bar(),
            enable_mouse: default_enable_mouse(),
            scroll_step: default_scroll_step(),
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/scrollquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("scrollquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Returns the store file for file storage.
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path
            .clone()
            .or_else(crate::history::store::FileStore::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_mode_default_is_memory() {
        assert_eq!(Config::default().storage, StorageMode::Memory);
    }

    #[test]
    fn test_explicit_storage_path_wins() {
        let config = Config {
            storage_path: Some(PathBuf::from("/tmp/frames.json")),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_storage_path(),
            Some(PathBuf::from("/tmp/frames.json"))
        );
    }
}
