//! Warden - Provenance Audit
//!
//! Classifies the files of a personal data export as signal, noise or
//! neutral by keyword, and copies the signal into a `PROVENANCE_VAULT`
//! directory that mirrors the export's layout.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{AuditObserver, AuditOptions, AuditSummary, AuditTreeUseCase, NullObserver};
pub use crate::core::{AuditError, Result};
pub use domain::entities::{Classification, KeywordSet, ScanTally, VAULT_DIR_NAME};
pub use domain::services::{Classifier, KeywordConfig};
pub use infrastructure::{LocalVaultWriter, LossyTextReader};

use std::path::Path;

/// Audits `source_root` into `dest_root` with the built-in keywords
///
/// Signal files are copied to `dest_root/PROVENANCE_VAULT`. Nothing is
/// printed; use [`AuditTreeUseCase::execute`] with an [`AuditObserver`] for
/// progress notifications.
pub fn run(source_root: impl AsRef<Path>, dest_root: impl AsRef<Path>) -> Result<AuditSummary> {
    AuditTreeUseCase::with_defaults()?.execute::<LocalVaultWriter>(
        source_root.as_ref(),
        dest_root.as_ref(),
        &NullObserver,
    )
}
