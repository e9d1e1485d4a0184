//! Application layer
//!
//! Use cases that orchestrate the domain logic over a real directory tree.

mod audit_tree;
pub mod dto;
mod observer;

pub use audit_tree::AuditTreeUseCase;
pub use dto::{AuditOptions, AuditSummary};
pub use observer::{AuditObserver, NullObserver};
