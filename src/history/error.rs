//! Error types for the scroll history.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the position store and the history engine.
///
/// `IndexOutOfRange` is a caller bug (for example a history bar that still
/// references an index the store has since trimmed). The store variants come
/// from a durable backend and never invalidate the in-memory history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A frame ordinal outside `0..len`.
    #[error("frame {index} is out of range (history holds {len} frames)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Reading or writing the frame store failed.
    #[error("frame store {} could not be accessed: {source}", .path.display())]
    StoreIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The frame store holds data that is not a frame list.
    #[error("frame store {} is corrupt: {source}", .path.display())]
    StoreCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl HistoryError {
    /// Returns true for failures of the persistence backend.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            HistoryError::StoreIo { .. } | HistoryError::StoreCorrupt { .. }
        )
    }
}
