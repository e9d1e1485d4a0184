//! Vault writer trait
//!
//! Defines the interface for securing signal files in the vault.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when copying one file into the vault
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("{} is not inside the source root", .0.display())]
    OutsideSource(PathBuf),

    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot copy to {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of securing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuredFile {
    /// Path of the copy inside the vault
    pub saved_path: PathBuf,
    /// Bytes copied
    pub saved_size: u64,
    /// Whether the source timestamps were carried over
    pub timestamps_preserved: bool,
}

/// Trait for copying signal files into the vault
///
/// Implementations must replace an existing destination file in full, keep
/// it intact when the copy fails, and tolerate several workers creating the
/// same directory at once.
///
/// # Example
///
/// ```ignore
/// let writer = LocalVaultWriter::new(Path::new("/dest/PROVENANCE_VAULT"))?;
/// let secured = writer.secure(Path::new("/takeout/a.txt"), Path::new("a.txt"))?;
/// println!("Saved to: {}", secured.saved_path.display());
/// ```
pub trait VaultWriter: Send + Sync {
    /// Opens a writer for the vault directory, creating it if needed
    fn new(vault_dir: &Path) -> io::Result<Self>
    where
        Self: Sized;

    /// Copies `source` to `relative` under the vault directory
    fn secure(&self, source: &Path, relative: &Path) -> Result<SecuredFile, VaultError>;

    /// Returns the vault directory
    fn vault_dir(&self) -> &Path;
}
