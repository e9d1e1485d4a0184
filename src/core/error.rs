use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an audit run
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Source path does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error("Cannot create vault at {}: {source}", path.display())]
    VaultCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid keyword: {0}")]
    InvalidKeyword(String),

    #[error("Failed to build keyword index: {0}")]
    KeywordIndex(#[from] aho_corasick::BuildError),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
