//! Pager state that ties the viewport to the scroll history.
//!
//! # Modules
//!
//! - `state`: `AppState`, which turns viewport changes into history records
//!   and history navigations back into viewport scrolls

pub mod state;

pub use state::{AppState, BarSlot, Message, MessageLevel};
