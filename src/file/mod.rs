//! File I/O for documents and the frame store.
//!
//! This module loads documents from files or stdin (transparently decompressing
//! gzip) and writes files atomically with optional gzip compression.

pub mod loader;
pub mod saver;
