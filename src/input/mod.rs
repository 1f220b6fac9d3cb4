//! Input handling for keyboard and mouse events.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::{InputEvent, KeyMap};
