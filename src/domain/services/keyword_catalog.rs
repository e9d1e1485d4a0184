//! Keyword catalog
//!
//! The built-in noise and signal keyword lists, kept as plain data so the
//! classifier can be built from any other lists as well.

use serde::Serialize;

/// Keywords marking a file as worth keeping
pub const DEFAULT_SIGNAL_KEYWORDS: &[&str] = &[
    "Logos",
    "RIE",
    "Urantia",
    "Kybalion",
    "E8",
    "Lie Group",
    "Restoration Grid",
    "Sovereign",
    "Real Estate",
    "Inheritance",
    "4M",
    "Asset",
    "Provenance",
    "De Paz",
    "Durban Princess",
];

/// Keywords marking a file as noise; these win over signal keywords
pub const DEFAULT_NOISE_KEYWORDS: &[&str] = &[
    "Receipt",
    "Order Confirmation",
    "Unsubscribe",
    "Notification",
    "TUUCI",
    "DualAV",
    "LinkedIn",
    "Job Alert",
    "Application",
    "Marketing",
    "Promo",
    "No-Reply",
];

/// The two keyword lists a classifier is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordConfig {
    pub noise: Vec<String>,
    pub signal: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            noise: to_owned(DEFAULT_NOISE_KEYWORDS),
            signal: to_owned(DEFAULT_SIGNAL_KEYWORDS),
        }
    }
}

impl KeywordConfig {
    /// Appends signal keywords after the configured ones
    pub fn with_extra_signal<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signal.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Appends noise keywords after the configured ones
    pub fn with_extra_noise<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise.extend(keywords.into_iter().map(Into::into));
        self
    }
}

fn to_owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}
