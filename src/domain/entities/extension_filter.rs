//! Extension filter entity

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions scanned when no override is configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["txt", "json", "html", "md", "eml"];

/// Set of accepted file extensions
///
/// Extensions are stored lowercase without the leading dot. A file is
/// accepted when its lowercased extension is in the set; files without an
/// extension are never accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    accepted: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accepted = extensions
            .into_iter()
            .map(|ext| normalize(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { accepted }
    }

    /// Returns true if the file at `path` should be classified
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.accepted.contains(&ext.to_lowercase()))
    }

    /// Accepted extensions, sorted
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.accepted.iter().map(String::as_str)
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_export_formats() {
        let filter = ExtensionFilter::default();
        for name in ["a.txt", "b.JSON", "c.Html", "d.md", "e.EML"] {
            assert!(filter.accepts(Path::new(name)), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejects_other_and_missing_extensions() {
        let filter = ExtensionFilter::default();
        assert!(!filter.accepts(Path::new("photo.png")));
        assert!(!filter.accepts(Path::new("README")));
        assert!(!filter.accepts(Path::new(".txt")));
        assert!(!filter.accepts(Path::new("notes.txt.bak")));
    }

    #[test]
    fn test_new_normalizes_dots_and_case() {
        let filter = ExtensionFilter::new([".CSV", "log"]);
        assert!(filter.accepts(Path::new("x.csv")));
        assert!(filter.accepts(Path::new("x.LOG")));
        assert_eq!(filter.extensions().collect::<Vec<_>>(), vec!["csv", "log"]);
    }
}
