//! Audit tree use case
//!
//! Walks a source tree, classifies every accepted file and secures the
//! signal files in the vault. Per-file problems are recorded and the walk
//! continues; only a missing source or an uncreatable vault abort the run.

use super::dto::{AuditOptions, AuditSummary};
use super::observer::AuditObserver;
use crate::core::{AuditError, Result};
use crate::domain::entities::{
    Classification, ExtensionFilter, FileIssue, IssueKind, TallyCounter, VaultLayout,
};
use crate::domain::repositories::{ContentReader, SecuredFile, VaultError, VaultWriter};
use crate::domain::services::Classifier;
use crate::infrastructure::LossyTextReader;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};
use walkdir::WalkDir;

/// State shared by every file of one run
struct RunContext<'a, W> {
    source_root: &'a Path,
    writer: &'a W,
    observer: &'a dyn AuditObserver,
    tally: TallyCounter,
    issues: Mutex<Vec<FileIssue>>,
}

impl<W> RunContext<'_, W> {
    fn report(&self, issue: FileIssue) {
        debug!("{}", issue);
        self.observer.on_issue(&issue);
        self.issues.lock().push(issue);
    }
}

/// Audit tree use case
///
/// Classifies a directory tree with a [`Classifier`] and copies signal files
/// into `<dest>/PROVENANCE_VAULT`, mirroring their source-relative paths.
pub struct AuditTreeUseCase<R: ContentReader> {
    classifier: Arc<Classifier>,
    reader: R,
    filter: ExtensionFilter,
    options: AuditOptions,
}

impl AuditTreeUseCase<LossyTextReader> {
    /// Default keywords, lossy UTF-8 reading and default options
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            Arc::new(Classifier::with_default_keywords()?),
            LossyTextReader::new(),
            AuditOptions::default(),
        ))
    }
}

impl<R: ContentReader> AuditTreeUseCase<R> {
    pub fn new(classifier: Arc<Classifier>, reader: R, options: AuditOptions) -> Self {
        let filter = options.extension_filter();
        Self {
            classifier,
            reader,
            filter,
            options,
        }
    }

    /// Executes the audit
    ///
    /// The source is validated before the vault is created, so a missing
    /// source leaves the destination untouched.
    pub fn execute<W: VaultWriter>(
        &self,
        source_root: &Path,
        dest_root: &Path,
        observer: &dyn AuditObserver,
    ) -> Result<AuditSummary> {
        let start_time = Instant::now();

        validate_source(source_root)?;

        let layout = VaultLayout::new(dest_root);
        let writer = W::new(layout.vault_dir()).map_err(|source| AuditError::VaultCreation {
            path: layout.vault_dir().to_path_buf(),
            source,
        })?;

        info!(
            "Starting audit of {} into {}",
            source_root.display(),
            layout.vault_dir().display()
        );
        observer.on_run_started(source_root, layout.vault_dir());

        let excluded = if self.options.exclude_vault {
            nested_vault(source_root, layout.vault_dir())
        } else {
            None
        };
        if let Some(dir) = &excluded {
            debug!("Vault lies inside the source, skipping {}", dir.display());
        }

        let run = RunContext {
            source_root,
            writer: &writer,
            observer,
            tally: TallyCounter::new(),
            issues: Mutex::new(Vec::new()),
        };

        if self.options.parallel {
            self.run_parallel(&run, excluded.as_deref())?;
        } else {
            self.walk(&run, excluded.as_deref(), |path| self.process(&run, path));
        }

        let summary = AuditSummary {
            source_root: source_root.to_path_buf(),
            vault_dir: layout.vault_dir().to_path_buf(),
            tally: run.tally.snapshot(),
            issues: run.issues.into_inner(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Audit complete: {} classified, {} kept, {} noise, {} neutral in {}ms",
            summary.total_classified(),
            summary.kept(),
            summary.noise(),
            summary.neutral(),
            summary.duration_ms
        );
        observer.on_run_complete(&summary);

        Ok(summary)
    }

    /// Collects candidates with the sequential walk, then classifies and
    /// copies them on a bounded pool
    fn run_parallel<W: VaultWriter>(
        &self,
        run: &RunContext<'_, W>,
        excluded: Option<&Path>,
    ) -> Result<()> {
        let mut candidates = Vec::new();
        self.walk(run, excluded, |path| candidates.push(path.to_path_buf()));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.thread_count)
            .build()?;

        debug!(
            "Classifying {} files on {} workers",
            candidates.len(),
            pool.current_num_threads()
        );
        pool.install(|| {
            candidates
                .par_iter()
                .for_each(|path| self.process(run, path));
        });

        Ok(())
    }

    /// Visits every regular file under the source root whose extension is
    /// accepted
    fn walk<W, F>(&self, run: &RunContext<'_, W>, excluded: Option<&Path>, mut visit: F)
    where
        F: FnMut(&Path),
    {
        let entries = WalkDir::new(run.source_root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| excluded.is_none_or(|dir| entry.path() != dir));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(run.source_root).to_path_buf();
                    run.report(FileIssue::new(path, IssueKind::Walk, e.to_string()));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.filter.accepts(path) {
                trace!("Skipping {}", path.display());
                continue;
            }

            visit(path);
        }
    }

    /// Classifies one file and applies its outcome
    fn process<W: VaultWriter>(&self, run: &RunContext<'_, W>, path: &Path) {
        let verdict = self.classifier.classify_source(&self.reader, path);

        debug!(
            "{} -> {} (keyword: {})",
            path.display(),
            verdict.classification.label(),
            verdict.keyword.unwrap_or("-")
        );
        run.observer
            .on_file_classified(path, &verdict.classification);

        match verdict.classification {
            Classification::Signal => {
                run.observer.on_signal_found(path);
                match secure(run, path) {
                    Ok(secured) => {
                        debug!(
                            "Secured {} ({} bytes)",
                            secured.saved_path.display(),
                            secured.saved_size
                        );
                        run.tally.record_kept();
                    }
                    Err(e) => {
                        run.tally.record_copy_failed();
                        run.report(FileIssue::new(path, IssueKind::Copy, e.to_string()));
                    }
                }
            }
            Classification::Noise => run.tally.record_noise(),
            Classification::Neutral => run.tally.record_neutral(),
            Classification::Error(message) => {
                run.tally.record_read_error();
                run.report(FileIssue::new(path, IssueKind::Read, message));
            }
        }
    }
}

fn secure<W: VaultWriter>(
    run: &RunContext<'_, W>,
    path: &Path,
) -> std::result::Result<SecuredFile, VaultError> {
    let relative = VaultLayout::relative_path(run.source_root, path)
        .ok_or_else(|| VaultError::OutsideSource(path.to_path_buf()))?;
    run.writer.secure(path, relative)
}

fn validate_source(source_root: &Path) -> Result<()> {
    match fs::metadata(source_root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(AuditError::SourceNotDirectory(source_root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(AuditError::SourceNotFound(source_root.to_path_buf()))
        }
        Err(e) => Err(AuditError::Io(e)),
    }
}

/// The vault's location expressed under `source_root`, when the vault sits
/// inside the source tree
fn nested_vault(source_root: &Path, vault_dir: &Path) -> Option<PathBuf> {
    let source = fs::canonicalize(source_root).ok()?;
    let vault = fs::canonicalize(vault_dir).ok()?;
    let relative = vault.strip_prefix(&source).ok()?;
    Some(source_root.join(relative))
}
