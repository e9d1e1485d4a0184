//! Per-file problems recorded during a run

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Stage of the run where a file ran into trouble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Directory entry could not be listed
    Walk,
    /// Content could not be read
    Read,
    /// Signal file could not be copied into the vault
    Copy,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Walk => write!(f, "walk"),
            IssueKind::Read => write!(f, "read"),
            IssueKind::Copy => write!(f, "copy"),
        }
    }
}

/// A non-fatal problem with one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileIssue {
    pub path: PathBuf,
    pub kind: IssueKind,
    pub message: String,
}

impl FileIssue {
    pub fn new(path: impl Into<PathBuf>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for {}: {}",
            self.kind,
            self.path.display(),
            self.message
        )
    }
}
