//! ScrollQuill - a terminal pager with undo/redo for the scroll position.
//!
//! While you read, the pager records where you are (debounced, so a burst of
//! scrolling becomes one frame) into a bounded history. The backward and
//! forward keys, or a click on the history bar, take you back to earlier
//! positions without adding new frames.
//!
//! - [`history`]: the recording and cycling engine
//! - [`app`]: glue between the viewport and the engine
//! - [`input`], [`ui`], [`theme`]: terminal front end
//! - [`config`], [`file`], [`document`]: settings, I/O and the paged text

pub mod app;
pub mod config;
pub mod document;
pub mod file;
pub mod history;
pub mod input;
pub mod theme;
pub mod ui;
