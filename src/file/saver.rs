//! Atomic file writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// The data goes to a temporary sibling file first, which is then renamed
/// over the target, so the target is never left partially written. Missing
/// parent directories are created. On failure the temporary file is
/// removed.
///
/// # Errors
///
/// Returns an error if creating the directory or temp file, writing,
/// compressing, or renaming fails.
pub fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> io::Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");

    let result = (|| {
        if compress {
            let file = fs::File::create(&temp_path)?;
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(data)?;
            encoder.finish()?;
        } else {
            fs::write(&temp_path, data)?;
        }
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
