//! Bounded storage for recorded frames.
//!
//! [`PositionStore`] keeps the most recent `capacity` positions in recording
//! order and mirrors every change into a [`FrameStore`] backend. Two backends
//! exist: [`MemoryStore`] keeps frames for the current session only, while
//! [`FileStore`] persists them to disk so history survives a restart.

pub mod durable;
pub mod memory;

pub use durable::FileStore;
pub use memory::MemoryStore;

use super::error::HistoryError;
use super::position::Position;
use log::{debug, warn};

/// A persistence backend for the frame list.
///
/// The store always hands over the complete frame list; backends do not need
/// to track incremental changes.
pub trait FrameStore {
    /// Reads the previously saved frames, oldest first.
    fn load(&mut self) -> Result<Vec<Position>, HistoryError>;

    /// Replaces the saved frames with `frames`.
    fn save(&mut self, frames: &[Position]) -> Result<(), HistoryError>;

    /// Short human readable name, shown in the status line.
    fn describe(&self) -> String;
}

/// An ordered, capacity-bounded sequence of recorded positions.
///
/// The length never exceeds the capacity. Appending to a full store drops the
/// oldest frames so only the newest `capacity` remain.
pub struct PositionStore {
    frames: Vec<Position>,
    capacity: usize,
    backend: Box<dyn FrameStore>,
}

impl PositionStore {
    /// Creates an empty store backed by `backend`.
    ///
    /// A capacity of zero is raised to one; a store that cannot hold the
    /// frame just recorded would break the engine's cycle index.
    pub fn new(capacity: usize, backend: Box<dyn FrameStore>) -> Self {
        Self {
            frames: Vec::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            backend,
        }
    }

    /// Creates an empty store that only lives for this session.
    pub fn in_memory(capacity: usize) -> Self {
        Self::new(capacity, Box::new(MemoryStore::new()))
    }

    /// Replaces the contents with whatever the backend saved earlier.
    ///
    /// Returns the number of frames restored. Frames beyond the capacity are
    /// dropped oldest first. On error the store is left empty.
    pub fn restore(&mut self) -> Result<usize, HistoryError> {
        self.frames.clear();
        let mut loaded = self.backend.load()?;
        if loaded.len() > self.capacity {
            loaded.drain(..loaded.len() - self.capacity);
        }
        self.frames = loaded;
        debug!(
            "restored {} frames from {}",
            self.frames.len(),
            self.backend.describe()
        );
        Ok(self.frames.len())
    }

    /// Adds `pos` as the newest frame, trimming the oldest ones past capacity.
    ///
    /// The in-memory append always succeeds. An `Err` only reports that the
    /// backend could not persist the new frame list.
    pub fn append(&mut self, pos: Position) -> Result<(), HistoryError> {
        self.frames.push(pos);
        if self.frames.len() > self.capacity {
            let excess = self.frames.len() - self.capacity;
            self.frames.drain(..excess);
        }

        self.backend.save(&self.frames).inspect_err(|e| {
            warn!("failed to persist frames: {}", e);
        })
    }

    /// Returns all frames, oldest first.
    pub fn all(&self) -> &[Position] {
        &self.frames
    }

    /// Returns the frame at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<Position, HistoryError> {
        self.frames
            .get(index)
            .copied()
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    /// Returns the number of stored frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frame has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the maximum number of frames kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Describes the persistence backend.
    pub fn backend_name(&self) -> String {
        self.backend.describe()
    }
}

impl std::fmt::Debug for PositionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionStore")
            .field("frames", &self.frames)
            .field("capacity", &self.capacity)
            .field("backend", &self.backend.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl FrameStore for FailingStore {
        fn load(&mut self) -> Result<Vec<Position>, HistoryError> {
            Err(HistoryError::StoreIo {
                path: "broken".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
            })
        }

        fn save(&mut self, _frames: &[Position]) -> Result<(), HistoryError> {
            Err(HistoryError::StoreIo {
                path: "broken".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
            })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn test_append_trims_oldest() {
        let mut store = PositionStore::in_memory(2);
        store.append(Position::new(0, 1)).unwrap();
        store.append(Position::new(0, 2)).unwrap();
        store.append(Position::new(0, 3)).unwrap();

        assert_eq!(store.all(), &[Position::new(0, 2), Position::new(0, 3)]);
    }

    #[test]
    fn test_zero_capacity_holds_one_frame() {
        let mut store = PositionStore::in_memory(0);
        store.append(Position::new(5, 5)).unwrap();
        store.append(Position::new(6, 6)).unwrap();

        assert_eq!(store.capacity(), 1);
        assert_eq!(store.all(), &[Position::new(6, 6)]);
    }

    #[test]
    fn test_failed_save_keeps_frame_in_memory() {
        let mut store = PositionStore::new(3, Box::new(FailingStore));
        let result = store.append(Position::new(1, 1));

        assert!(result.unwrap_err().is_store_error());
        assert_eq!(store.len(), 1);
        assert_eq!(store.at(0).unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_failed_restore_leaves_store_empty() {
        let mut store = PositionStore::new(3, Box::new(FailingStore));
        assert!(store.restore().is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_keeps_newest_frames() {
        let mut backend = MemoryStore::new();
        backend
            .save(&[
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3),
            ])
            .unwrap();

        let mut store = PositionStore::new(2, Box::new(backend));
        assert_eq!(store.restore().unwrap(), 2);
        assert_eq!(store.all(), &[Position::new(0, 2), Position::new(0, 3)]);
    }
}
