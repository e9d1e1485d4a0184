//! Keyword set entity
//!
//! An immutable list of case-insensitive substring patterns compiled into a
//! single Aho-Corasick automaton, so a file is searched once per set no
//! matter how many keywords the set holds.

use crate::core::{AuditError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use std::borrow::Cow;

/// Non-ASCII letters whose simple case fold is an ASCII letter
const ASCII_FOLDS: [(char, char); 4] = [
    ('\u{0130}', 'i'), // LATIN CAPITAL LETTER I WITH DOT ABOVE
    ('\u{0131}', 'i'), // LATIN SMALL LETTER DOTLESS I
    ('\u{017F}', 's'), // LATIN SMALL LETTER LONG S
    ('\u{212A}', 'k'), // KELVIN SIGN
];

fn ascii_fold(c: char) -> Option<char> {
    ASCII_FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Rewrites the letters in [`ASCII_FOLDS`] so the ASCII-insensitive
/// automaton sees them; borrows when there is nothing to rewrite
fn fold_for_matching(content: &str) -> Cow<'_, str> {
    if content.is_ascii() || !content.chars().any(|c| ascii_fold(c).is_some()) {
        return Cow::Borrowed(content);
    }
    Cow::Owned(
        content
            .chars()
            .map(|c| ascii_fold(c).unwrap_or(c))
            .collect(),
    )
}

/// Case-insensitive substring patterns tested against file content
///
/// Case folding covers ASCII letters plus the few non-ASCII letters that
/// fold to them (Kelvin sign, long s, dotted and dotless i). Other non-ASCII
/// letters match only in the case they are written.
///
/// # Example
///
/// ```
/// use warden::domain::entities::KeywordSet;
///
/// let set = KeywordSet::new(["Logos", "Urantia"]).unwrap();
/// assert!(set.is_match("notes on the URANTIA papers"));
/// assert_eq!(set.first_match("logos study"), Some("Logos"));
/// assert!(!set.is_match("weekly grocery list"));
/// ```
#[derive(Debug, Clone)]
pub struct KeywordSet {
    patterns: Vec<String>,
    /// `None` when the set is empty; an empty set never matches
    matcher: Option<AhoCorasick>,
}

impl KeywordSet {
    /// Compiles the given patterns
    ///
    /// Blank patterns are rejected because they would match every file.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();

        if let Some(position) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(AuditError::InvalidKeyword(format!(
                "pattern #{} is blank",
                position + 1
            )));
        }

        if patterns.is_empty() {
            return Ok(Self::empty());
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(&patterns)?;

        Ok(Self {
            patterns,
            matcher: Some(matcher),
        })
    }

    /// A set that matches nothing
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            matcher: None,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if any pattern occurs anywhere in `content`
    pub fn is_match(&self, content: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(fold_for_matching(content).as_ref()))
    }

    /// Returns the pattern of the leftmost occurrence in `content`
    pub fn first_match(&self, content: &str) -> Option<&str> {
        let found = self
            .matcher
            .as_ref()?
            .find(fold_for_matching(content).as_ref())?;
        self.patterns
            .get(found.pattern().as_usize())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_anywhere_in_content() {
        let set = KeywordSet::new(["Lie Group"]).unwrap();
        assert!(set.is_match("the E8 lie group, revisited"));
        assert!(set.is_match("xxLIE GROUPxx"));
        assert!(!set.is_match("lie  group"));
    }

    #[test]
    fn test_first_match_reports_pattern_text() {
        let set = KeywordSet::new(["Asset", "Inheritance"]).unwrap();
        assert_eq!(
            set.first_match("inheritance of the asset"),
            Some("Inheritance")
        );
        assert_eq!(set.first_match("nothing here"), None);
    }

    #[test]
    fn test_empty_set_never_matches() {
        let set = KeywordSet::new(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(!set.is_match("anything"));
        assert_eq!(set.first_match("anything"), None);
    }

    #[test]
    fn test_letters_folding_to_ascii_still_match() {
        let set = KeywordSet::new(["Kybalion", "Sovereign", "Inheritance"]).unwrap();
        assert_eq!(set.first_match("\u{212A}ybalion"), Some("Kybalion"));
        assert_eq!(set.first_match("\u{017F}overeign"), Some("Sovereign"));
        assert_eq!(set.first_match("\u{0130}NHER\u{0130}TANCE"), Some("Inheritance"));
        assert_eq!(set.first_match("inher\u{0131}tance"), Some("Inheritance"));
    }

    #[test]
    fn test_plain_text_is_not_copied_for_folding() {
        assert!(matches!(fold_for_matching("caf\u{e9} Logos"), Cow::Borrowed(_)));
        assert!(matches!(fold_for_matching("\u{212A}elvin"), Cow::Owned(_)));
    }

    #[test]
    fn test_blank_pattern_is_rejected() {
        let err = KeywordSet::new(["Logos", "  "]).unwrap_err();
        assert!(matches!(err, AuditError::InvalidKeyword(_)));
    }
}
