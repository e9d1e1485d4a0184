//! Local vault writer implementation
//!
//! Copies signal files into a vault directory on the local filesystem,
//! carrying over access and modification times.

use crate::domain::repositories::{SecuredFile, VaultError, VaultWriter};
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const STAGING_SUFFIX: &str = "warden-partial";

/// Local file system vault writer
///
/// Each copy is written to a hidden staging file next to its destination
/// and renamed into place, so an earlier copy survives a failed one.
pub struct LocalVaultWriter {
    vault_dir: PathBuf,
}

impl LocalVaultWriter {
    fn staging_path(dest: &Path) -> PathBuf {
        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        dest.with_file_name(format!(".{}.{}", name, STAGING_SUFFIX))
    }

    fn discard(staging: &Path) {
        if let Err(e) = fs::remove_file(staging) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!("Could not remove {}: {}", staging.display(), e);
            }
        }
    }

    fn preserve_times(source: &Path, dest: &Path) -> io::Result<()> {
        let meta = fs::metadata(source)?;
        let atime = FileTime::from_last_access_time(&meta);
        let mtime = FileTime::from_last_modification_time(&meta);
        filetime::set_file_times(dest, atime, mtime)
    }
}

impl VaultWriter for LocalVaultWriter {
    fn new(vault_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(vault_dir)?;

        Ok(Self {
            vault_dir: vault_dir.to_path_buf(),
        })
    }

    fn secure(&self, source: &Path, relative: &Path) -> Result<SecuredFile, VaultError> {
        let dest = self.vault_dir.join(relative);

        // create_dir_all treats a directory created concurrently as success
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| VaultError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let staging = Self::staging_path(&dest);
        // leftover from an interrupted run, possibly read-only
        Self::discard(&staging);

        let saved_size = match fs::copy(source, &staging) {
            Ok(size) => size,
            Err(source) => {
                Self::discard(&staging);
                return Err(VaultError::Copy { path: dest, source });
            }
        };

        // rename keeps the times set on the staging file
        let timestamps_preserved = match Self::preserve_times(source, &staging) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Copied {} but could not preserve timestamps: {}",
                    dest.display(),
                    e
                );
                false
            }
        };

        if let Err(source) = fs::rename(&staging, &dest) {
            Self::discard(&staging);
            return Err(VaultError::Copy { path: dest, source });
        }

        Ok(SecuredFile {
            saved_path: dest,
            saved_size,
            timestamps_preserved,
        })
    }

    fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }
}
