//! The undo/redo state machine for scroll positions.

use super::error::HistoryError;
use super::position::Position;
use super::store::PositionStore;
use log::{debug, trace};
use std::collections::VecDeque;

/// Receives scroll-to requests issued by the history engine.
///
/// The host turns each request into an actual viewport scroll. Closures taking
/// a [`Position`] implement this trait, so a quick sink is just `|pos| ...`.
pub trait Navigator {
    fn navigate_to(&mut self, pos: Position);
}

impl<F: FnMut(Position)> Navigator for F {
    fn navigate_to(&mut self, pos: Position) {
        self(pos)
    }
}

/// A navigator that queues requests for the host to apply later.
///
/// Useful when the viewport is owned by the same structure that owns the
/// engine and cannot be borrowed from inside a callback.
#[derive(Debug, Clone, Default)]
pub struct NavigationQueue {
    pending: VecDeque<Position>,
}

impl NavigationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the oldest pending request.
    pub fn pop(&mut self) -> Option<Position> {
        self.pending.pop_front()
    }

    /// Takes all pending requests, oldest first.
    pub fn drain(&mut self) -> Vec<Position> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Navigator for NavigationQueue {
    fn navigate_to(&mut self, pos: Position) {
        self.pending.push_back(pos);
    }
}

/// Records scroll positions and steps backward/forward through them.
///
/// The engine tracks which frame the user is looking at (the cycle index) and
/// a one-shot suppression flag. Every navigation the engine issues clears the
/// flag right before scrolling, so the scroll notification that navigation
/// produces is swallowed by the next [`record`](Self::record) call instead of
/// being stored as a new frame. Without this, each backward step would be
/// immediately overwritten by its own echo.
#[derive(Debug)]
pub struct HistoryEngine<N: Navigator> {
    store: PositionStore,
    /// `None` until something is recorded
    cycle_index: Option<usize>,
    should_record: bool,
    navigator: N,
}

impl<N: Navigator> HistoryEngine<N> {
    /// Creates an engine over `store` that sends scroll requests to `navigator`.
    ///
    /// The cycle index starts unset even if the store was restored with frames;
    /// the first recorded position points it at the newest frame.
    pub fn new(store: PositionStore, navigator: N) -> Self {
        Self {
            store,
            cycle_index: None,
            should_record: true,
            navigator,
        }
    }

    /// Handles a scroll notification carrying the current viewport offsets.
    ///
    /// If the previous operation was an engine navigation, this call is its
    /// echo: the suppression flag is re-armed and nothing is stored. Otherwise
    /// `pos` becomes the newest frame and the cycle index points at it.
    ///
    /// # Errors
    ///
    /// Only reports a failure to persist the frame list. The frame is recorded
    /// in memory regardless.
    pub fn record(&mut self, pos: Position) -> Result<(), HistoryError> {
        if !self.should_record {
            self.should_record = true;
            debug!("ignoring scroll echo at {}", pos);
            return Ok(());
        }

        let saved = self.store.append(pos);
        self.cycle_index = Some(self.store.len() - 1);
        trace!("recorded {} as frame {}", pos, self.store.len() - 1);
        saved
    }

    /// Steps to the previous frame and scrolls there.
    ///
    /// Returns the target position, or `None` when already at the oldest frame
    /// or when nothing has been recorded.
    pub fn cycle_backward(&mut self) -> Option<Position> {
        let target = match self.cycle_index {
            Some(index) if index > 0 => index - 1,
            _ => return None,
        };
        self.navigate(target)
    }

    /// Steps to the next frame and scrolls there.
    ///
    /// Returns the target position, or `None` when already at the newest frame.
    pub fn cycle_forward(&mut self) -> Option<Position> {
        let target = self.cycle_index.map_or(0, |index| index + 1);
        if target >= self.store.len() {
            return None;
        }
        self.navigate(target)
    }

    /// Scrolls straight to frame `index`, e.g. after a click on the history bar.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] if `index` does not name a
    /// stored frame. No state changes in that case.
    pub fn jump_to(&mut self, index: usize) -> Result<Position, HistoryError> {
        let pos = self.store.at(index)?;
        self.should_record = false;
        self.navigator.navigate_to(pos);
        self.cycle_index = Some(index);
        debug!("jumped to frame {} at {}", index, pos);
        Ok(pos)
    }

    fn navigate(&mut self, target: usize) -> Option<Position> {
        let pos = self.store.at(target).ok()?;
        self.should_record = false;
        self.cycle_index = Some(target);
        self.navigator.navigate_to(pos);
        debug!("cycled to frame {} at {}", target, pos);
        Some(pos)
    }

    /// Returns the frame the user is currently on.
    pub fn cycle_index(&self) -> Option<usize> {
        self.cycle_index
    }

    /// Returns the position of the current frame.
    pub fn current(&self) -> Option<Position> {
        self.cycle_index.and_then(|index| self.store.at(index).ok())
    }

    /// Returns false while a navigation echo is expected.
    pub fn should_record(&self) -> bool {
        self.should_record
    }

    /// Returns all recorded frames, oldest first.
    pub fn frames(&self) -> &[Position] {
        self.store.all()
    }

    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(capacity: usize) -> HistoryEngine<NavigationQueue> {
        HistoryEngine::new(PositionStore::in_memory(capacity), NavigationQueue::new())
    }

    #[test]
    fn test_new_engine_has_no_cycle_index() {
        let engine = engine(10);
        assert_eq!(engine.cycle_index(), None);
        assert!(engine.should_record());
        assert!(engine.frames().is_empty());
    }

    #[test]
    fn test_closure_navigator() {
        let mut seen = Vec::new();
        {
            let mut engine = HistoryEngine::new(PositionStore::in_memory(4), |pos: Position| {
                seen.push(pos)
            });
            engine.record(Position::new(0, 1)).unwrap();
            engine.record(Position::new(0, 2)).unwrap();
            engine.cycle_backward();
        }
        assert_eq!(seen, vec![Position::new(0, 1)]);
    }

    #[test]
    fn test_forward_from_restored_store_starts_at_oldest() {
        use crate::history::store::{FrameStore, MemoryStore};

        let mut backend = MemoryStore::new();
        backend
            .save(&[Position::new(0, 5), Position::new(0, 6)])
            .unwrap();
        let mut store = PositionStore::new(4, Box::new(backend));
        store.restore().unwrap();

        let mut engine = HistoryEngine::new(store, NavigationQueue::new());
        assert_eq!(engine.cycle_backward(), None);
        assert_eq!(engine.cycle_forward(), Some(Position::new(0, 5)));
        assert_eq!(engine.cycle_index(), Some(0));
    }

    #[test]
    fn test_jump_out_of_range_leaves_state_alone() {
        let mut engine = engine(4);
        engine.record(Position::new(0, 1)).unwrap();

        let err = engine.jump_to(3).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::IndexOutOfRange { index: 3, len: 1 }
        ));
        assert!(engine.should_record());
        assert_eq!(engine.cycle_index(), Some(0));
        assert!(engine.navigator().is_empty());
    }

    #[test]
    fn test_current_follows_cycle_index() {
        let mut engine = engine(4);
        engine.record(Position::new(0, 1)).unwrap();
        engine.record(Position::new(0, 2)).unwrap();
        assert_eq!(engine.current(), Some(Position::new(0, 2)));

        engine.cycle_backward();
        assert_eq!(engine.current(), Some(Position::new(0, 1)));
    }
}
