//! Repository traits (interfaces)
//!
//! Contracts for the filesystem services the audit depends on, so the
//! walk can be exercised against failing readers and writers.

mod content_reader;
mod vault_writer;

pub use content_reader::ContentReader;
pub use vault_writer::{SecuredFile, VaultError, VaultWriter};
