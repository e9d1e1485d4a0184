//! Content sources

mod lossy_text_reader;

pub use lossy_text_reader::{LossyTextReader, decode_lossy};
