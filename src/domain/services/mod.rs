//! Domain services
//!
//! Classification logic and the keyword catalog it is built from.

mod classifier;
mod keyword_catalog;

pub use classifier::Classifier;
pub use keyword_catalog::{DEFAULT_NOISE_KEYWORDS, DEFAULT_SIGNAL_KEYWORDS, KeywordConfig};
