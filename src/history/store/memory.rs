//! Session-scoped frame storage.

use super::FrameStore;
use crate::history::error::HistoryError;
use crate::history::position::Position;

/// Keeps saved frames in memory; history is gone once the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    frames: Vec<Position>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameStore for MemoryStore {
    fn load(&mut self) -> Result<Vec<Position>, HistoryError> {
        Ok(self.frames.clone())
    }

    fn save(&mut self, frames: &[Position]) -> Result<(), HistoryError> {
        self.frames = frames.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
