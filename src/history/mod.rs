//! Scroll position history.
//!
//! This module holds the undo/redo engine for in-page scroll positions:
//! recorded frames live in a bounded [`PositionStore`], the [`HistoryEngine`]
//! steps backward and forward through them, and the [`Debouncer`] throttles
//! how often scroll notifications reach the engine.
//!
//! # Modules
//!
//! - `position`: The `(x, y)` scroll offset pair
//! - `store`: Bounded frame storage and its persistence backends
//! - `engine`: Cycle index and suppression flag state machine
//! - `debounce`: Leading-edge throttling of scroll notifications
//! - `error`: Error type shared by the modules above
//!
//! # Example
//!
//! ```
//! use scrollquill::history::{HistoryEngine, NavigationQueue, Position, PositionStore};
//!
//! let mut engine = HistoryEngine::new(PositionStore::in_memory(10), NavigationQueue::new());
//! engine.record(Position::new(0, 0)).unwrap();
//! engine.record(Position::new(0, 40)).unwrap();
//!
//! engine.cycle_backward();
//! assert_eq!(engine.navigator_mut().pop(), Some(Position::new(0, 0)));
//! ```

pub mod debounce;
pub mod engine;
pub mod error;
pub mod position;
pub mod store;

pub use debounce::{Debounced, Debouncer};
pub use engine::{HistoryEngine, NavigationQueue, Navigator};
pub use error::HistoryError;
pub use position::Position;
pub use store::{FrameStore, PositionStore};
