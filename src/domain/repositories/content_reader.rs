//! Content reader trait
//!
//! Defines how file content is obtained for classification.

use std::io;
use std::path::Path;

/// Trait for reading a file as text
///
/// Implementations must tolerate bytes that are not valid in the assumed
/// encoding: only failures to obtain the bytes at all (missing file,
/// permission denied, I/O fault) are reported as errors.
pub trait ContentReader: Send + Sync {
    /// Reads the whole file and decodes it on a best-effort basis
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

impl<R: ContentReader + ?Sized> ContentReader for &R {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }
}
