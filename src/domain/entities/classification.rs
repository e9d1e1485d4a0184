//! Classification entity
//!
//! The outcome of judging a single file's content.

use std::fmt;

/// The bucket a file falls into
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// High-value content, secured in the vault
    Signal,
    /// Low-value content; vetoes any signal keyword in the same file
    Noise,
    /// Matched neither keyword set
    Neutral,
    /// Content could not be obtained
    Error(String),
}

impl Classification {
    /// Returns true if the file should be copied into the vault
    pub fn is_signal(&self) -> bool {
        matches!(self, Classification::Signal)
    }

    /// Returns true for read failures
    pub fn is_error(&self) -> bool {
        matches!(self, Classification::Error(_))
    }

    /// Short upper-case label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Signal => "SIGNAL",
            Classification::Noise => "NOISE",
            Classification::Neutral => "NEUTRAL",
            Classification::Error(_) => "ERROR",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Error(message) => write!(f, "ERROR: {}", message),
            other => f.write_str(other.label()),
        }
    }
}

/// A classification together with the keyword that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict<'k> {
    pub classification: Classification,
    /// The pattern that matched, `None` for neutral content
    pub keyword: Option<&'k str>,
}

impl<'k> Verdict<'k> {
    pub fn new(classification: Classification, keyword: Option<&'k str>) -> Self {
        Self {
            classification,
            keyword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_error_message() {
        let c = Classification::Error("permission denied".to_string());
        assert_eq!(c.to_string(), "ERROR: permission denied");
        assert_eq!(Classification::Noise.to_string(), "NOISE");
    }

    #[test]
    fn test_predicates() {
        assert!(Classification::Signal.is_signal());
        assert!(!Classification::Neutral.is_signal());
        assert!(Classification::Error(String::new()).is_error());
    }
}
