//! Frame storage persisted to a JSON key-value file.
//!
//! The file holds one entry per origin (the document being viewed), and each
//! origin entry is a small key-value object. Frames live under the
//! [`FRAMES_KEY`] key as an array of `[x, y]` pairs:
//!
//! ```json
//! {
//!   "/home/me/notes.txt": { "windowFrames": [[0, 0], [0, 120]] }
//! }
//! ```
//!
//! Other origins and any other keys are carried over untouched when saving.

use super::FrameStore;
use crate::file::loader::read_text_file;
use crate::file::saver::write_file_atomic;
use crate::history::error::HistoryError;
use crate::history::position::Position;
use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

/// Key under which an origin's frame list is stored.
pub const FRAMES_KEY: &str = "windowFrames";

type OriginMap = IndexMap<String, IndexMap<String, Value>>;

/// Persists frames for one origin into a shared JSON file.
///
/// Every save rewrites the file atomically. Paths ending in `.gz` are stored
/// gzip-compressed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    origin: String,
}

impl FileStore {
    /// Creates a store for `origin` inside the file at `path`.
    ///
    /// Nothing is read or written until the first `load` or `save`.
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, origin: S) -> Self {
        Self {
            path: path.into(),
            origin: origin.into(),
        }
    }

    /// Returns the default store file, `<data dir>/scrollquill/frames.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|mut path| {
            path.push("scrollquill");
            path.push("frames.json");
            path
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn read_origins(&self) -> Result<OriginMap, HistoryError> {
        let content = match read_text_file(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(OriginMap::new()),
            Err(source) => {
                return Err(HistoryError::StoreIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(OriginMap::new());
        }

        serde_json::from_str(&content).map_err(|source| HistoryError::StoreCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn is_compressed(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == "gz")
            .unwrap_or(false)
    }
}

impl FrameStore for FileStore {
    fn load(&mut self) -> Result<Vec<Position>, HistoryError> {
        let origins = self.read_origins()?;
        let Some(frames) = origins.get(&self.origin).and_then(|entry| entry.get(FRAMES_KEY))
        else {
            return Ok(Vec::new());
        };

        serde_json::from_value(frames.clone()).map_err(|source| HistoryError::StoreCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, frames: &[Position]) -> Result<(), HistoryError> {
        // A corrupt file would otherwise block every future save.
        let mut origins = self.read_origins().unwrap_or_else(|e| {
            warn!("discarding unreadable frame store: {}", e);
            OriginMap::new()
        });

        let frames = serde_json::to_value(frames).map_err(|source| HistoryError::StoreCorrupt {
            path: self.path.clone(),
            source,
        })?;
        origins
            .entry(self.origin.clone())
            .or_default()
            .insert(FRAMES_KEY.to_string(), frames);

        let json = serde_json::to_string_pretty(&origins).map_err(|source| {
            HistoryError::StoreCorrupt {
                path: self.path.clone(),
                source,
            }
        })?;

        write_file_atomic(&self.path, json.as_bytes(), self.is_compressed()).map_err(
            |source| HistoryError::StoreIo {
                path: self.path.clone(),
                source,
            },
        )?;

        debug!("saved frames for {} to {}", self.origin, self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("frames.json"), "doc");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_frames_under_fixed_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frames.json");
        let mut store = FileStore::new(&path, "doc");

        store
            .save(&[Position::new(0, 0), Position::new(3, 40)])
            .unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["doc"][FRAMES_KEY], serde_json::json!([[0, 0], [3, 40]]));
    }

    #[test]
    fn test_save_preserves_other_origins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frames.json");
        fs::write(
            &path,
            r#"{"other": {"windowFrames": [[1, 1]], "zoom": 2}}"#,
        )
        .unwrap();

        let mut store = FileStore::new(&path, "doc");
        store.save(&[Position::new(0, 9)]).unwrap();

        let mut other = FileStore::new(&path, "other");
        assert_eq!(other.load().unwrap(), vec![Position::new(1, 1)]);

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["other"]["zoom"], 2);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frames.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::new(&path, "doc");
        assert!(matches!(
            store.load(),
            Err(HistoryError::StoreCorrupt { .. })
        ));
    }

    #[test]
    fn test_save_recovers_from_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frames.json");
        fs::write(&path, "{broken").unwrap();

        let mut store = FileStore::new(&path, "doc");
        store.save(&[Position::new(2, 2)]).unwrap();
        assert_eq!(store.load().unwrap(), vec![Position::new(2, 2)]);
    }
}
