//! Document loading.
//!
//! This module provides functions to load text documents from files or stdin
//! into a [`Document`] that the pager can scroll through.

use crate::document::Document;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a file to a string, decompressing it if the name ends in `.gz`.
///
/// # Errors
///
/// Returns the underlying I/O error, including `NotFound` for missing files
/// and `InvalidData` for corrupt gzip streams or non UTF-8 content.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let path = path.as_ref();

    let is_gzipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gzipped {
        let file = fs::File::open(path)?;
        let mut decoder = flate2::read::GzDecoder::new(file);
        let mut content = String::new();
        decoder.read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(path)
    }
}

/// Loads a document from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use scrollquill::file::loader::load_document;
///
/// let doc = load_document("README.md").unwrap();
/// println!("{} lines", doc.line_count());
/// ```
///
/// # Errors
///
/// This function will return an error if the file does not exist, cannot be
/// read, or is not valid (optionally gzipped) UTF-8 text.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = read_text_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Document::from_text(&content))
}

/// Loads a document from standard input.
///
/// Gzip input is detected by its magic bytes (0x1f 0x8b).
///
/// # Errors
///
/// Returns an error if reading stdin fails or the content is not UTF-8.
pub fn load_document_from_stdin() -> Result<Document> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    document_from_bytes(&buffer)
}

/// Builds a document from raw bytes, decompressing gzip data.
pub fn document_from_bytes(bytes: &[u8]) -> Result<Document> {
    let content = if bytes.len() >= 2 && bytes[0] == 0x1f && bytes[1] == 0x8b {
        let mut decoder = flate2::read::GzDecoder::new(bytes);
        let mut content = String::new();
        decoder
            .read_to_string(&mut content)
            .context("Failed to decompress gzipped input - data may be corrupted")?;
        content
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8")?
    };

    Ok(Document::from_text(&content))
}
