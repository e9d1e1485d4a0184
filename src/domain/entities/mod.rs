//! Domain entities
//!
//! Core business objects of the audit: verdicts, keyword sets, the
//! extension filter, counters and the vault layout.

mod classification;
mod extension_filter;
mod file_issue;
mod keyword_set;
mod scan_tally;
mod vault_layout;

pub use classification::{Classification, Verdict};
pub use extension_filter::{DEFAULT_EXTENSIONS, ExtensionFilter};
pub use file_issue::{FileIssue, IssueKind};
pub use keyword_set::KeywordSet;
pub use scan_tally::{ScanTally, TallyCounter};
pub use vault_layout::{VAULT_DIR_NAME, VaultLayout};
