//! Vault persistence

mod local_vault_writer;

pub use local_vault_writer::LocalVaultWriter;
