//! Audit summary DTO

use crate::domain::entities::{FileIssue, IssueKind, ScanTally};
use serde::Serialize;
use std::path::PathBuf;

/// Result of an audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    /// Directory that was scanned
    pub source_root: PathBuf,
    /// Vault the signal files were copied into
    pub vault_dir: PathBuf,
    pub tally: ScanTally,
    /// Per-file problems, in the order they were reported
    pub issues: Vec<FileIssue>,
    /// Wall-clock duration of the run
    pub duration_ms: u64,
}

impl AuditSummary {
    /// Kept, noise and neutral files; the "Total Files Scanned" figure
    pub fn total_classified(&self) -> usize {
        self.tally.classified()
    }

    pub fn kept(&self) -> usize {
        self.tally.kept
    }

    pub fn noise(&self) -> usize {
        self.tally.noise
    }

    pub fn neutral(&self) -> usize {
        self.tally.neutral
    }

    pub fn read_errors(&self) -> usize {
        self.tally.read_errors
    }

    pub fn copy_failures(&self) -> usize {
        self.tally.copy_failed
    }

    /// Issues of one kind
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &FileIssue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }

    /// True when no file ran into trouble
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
