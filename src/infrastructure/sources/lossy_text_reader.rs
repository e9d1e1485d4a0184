//! Lossy text reader
//!
//! Reads files as UTF-8, replacing invalid sequences with U+FFFD instead of
//! failing. Exports are full of mislabelled encodings, and a keyword in
//! otherwise ASCII text still has to be found.

use crate::domain::repositories::ContentReader;
use std::fs;
use std::io;
use std::path::Path;

/// Decodes `bytes` as UTF-8, replacing every invalid sequence
///
/// Valid input is returned without copying.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Reads whole files from the local filesystem with [`decode_lossy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LossyTextReader;

impl LossyTextReader {
    pub fn new() -> Self {
        Self
    }
}

impl ContentReader for LossyTextReader {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read(path).map(decode_lossy)
    }
}
