//! Audit observer
//!
//! Side channel through which a run reports progress. The walk never prints;
//! the CLI attaches a console observer, tests attach recording ones.

use super::dto::AuditSummary;
use crate::domain::entities::{Classification, FileIssue};
use std::path::Path;

/// Receives notifications while an audit runs
///
/// All methods default to doing nothing. With a parallel run the calls
/// arrive from several worker threads in no particular order.
pub trait AuditObserver: Send + Sync {
    /// Called once after the vault exists and before the walk starts
    fn on_run_started(&self, _source_root: &Path, _vault_dir: &Path) {}

    /// Called for every accepted file, read failures included
    fn on_file_classified(&self, _path: &Path, _classification: &Classification) {}

    /// Called for every signal file, before it is copied
    fn on_signal_found(&self, _path: &Path) {}

    /// Called for every walk, read or copy problem
    fn on_issue(&self, _issue: &FileIssue) {}

    fn on_run_complete(&self, _summary: &AuditSummary) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl AuditObserver for NullObserver {}
