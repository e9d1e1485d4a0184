//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories.
//! This layer holds all direct filesystem access.

pub mod persistence;
pub mod sources;

pub use persistence::LocalVaultWriter;
pub use sources::{LossyTextReader, decode_lossy};
