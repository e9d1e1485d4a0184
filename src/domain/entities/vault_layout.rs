//! Vault layout entity
//!
//! Maps source files to their mirrored location inside the vault.

use std::path::{Path, PathBuf};

/// Name of the subdirectory created under the destination root
pub const VAULT_DIR_NAME: &str = "PROVENANCE_VAULT";

/// Destination root plus the fixed vault subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultLayout {
    dest_root: PathBuf,
    vault_dir: PathBuf,
}

impl VaultLayout {
    pub fn new(dest_root: impl Into<PathBuf>) -> Self {
        let dest_root = dest_root.into();
        let vault_dir = dest_root.join(VAULT_DIR_NAME);
        Self {
            dest_root,
            vault_dir,
        }
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// Directory that receives copies of signal files
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Path of `file` relative to `source_root`, or `None` if it lies outside
    pub fn relative_path<'a>(source_root: &Path, file: &'a Path) -> Option<&'a Path> {
        file.strip_prefix(source_root).ok()
    }

    /// Where `file` lands inside the vault
    pub fn target_for(&self, source_root: &Path, file: &Path) -> Option<PathBuf> {
        Self::relative_path(source_root, file).map(|rel| self.vault_dir.join(rel))
    }
}
