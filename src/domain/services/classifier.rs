//! Classifier service
//!
//! Decides whether a file is signal, noise or neutral. The noise set is
//! always consulted first and acts as a veto: a file mentioning both a noise
//! and a signal keyword is noise.

use super::keyword_catalog::KeywordConfig;
use crate::core::Result;
use crate::domain::entities::{Classification, KeywordSet, Verdict};
use crate::domain::repositories::ContentReader;
use std::path::Path;

/// Keyword-based file classifier
///
/// # Example
///
/// ```
/// use warden::domain::entities::Classification;
/// use warden::domain::services::Classifier;
///
/// let classifier = Classifier::with_default_keywords().unwrap();
/// assert_eq!(classifier.classify("Logos study notes"), Classification::Signal);
/// assert_eq!(
///     classifier.classify("Your Order Confirmation for Logos item"),
///     Classification::Noise
/// );
/// assert_eq!(classifier.classify("weekly grocery list"), Classification::Neutral);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    noise: KeywordSet,
    signal: KeywordSet,
}

impl Classifier {
    pub fn new(noise: KeywordSet, signal: KeywordSet) -> Self {
        Self { noise, signal }
    }

    /// Compiles both lists of `config`
    pub fn from_config(config: &KeywordConfig) -> Result<Self> {
        Ok(Self::new(
            KeywordSet::new(config.noise.iter().cloned())?,
            KeywordSet::new(config.signal.iter().cloned())?,
        ))
    }

    /// Creates a classifier with the built-in keyword catalog
    pub fn with_default_keywords() -> Result<Self> {
        Self::from_config(&KeywordConfig::default())
    }

    pub fn noise(&self) -> &KeywordSet {
        &self.noise
    }

    pub fn signal(&self) -> &KeywordSet {
        &self.signal
    }

    pub fn classify(&self, content: &str) -> Classification {
        self.classify_detailed(content).classification
    }

    /// Classifies `content` and reports the keyword that decided it
    pub fn classify_detailed(&self, content: &str) -> Verdict<'_> {
        if let Some(keyword) = self.noise.first_match(content) {
            return Verdict::new(Classification::Noise, Some(keyword));
        }

        match self.signal.first_match(content) {
            Some(keyword) => Verdict::new(Classification::Signal, Some(keyword)),
            None => Verdict::new(Classification::Neutral, None),
        }
    }

    /// Reads `path` through `reader` and classifies it
    ///
    /// Read failures become [`Classification::Error`]; they are never
    /// returned as `Err`.
    pub fn classify_source<R>(&self, reader: &R, path: &Path) -> Verdict<'_>
    where
        R: ContentReader + ?Sized,
    {
        match reader.read_text(path) {
            Ok(content) => self.classify_detailed(&content),
            Err(e) => Verdict::new(Classification::Error(e.to_string()), None),
        }
    }
}
