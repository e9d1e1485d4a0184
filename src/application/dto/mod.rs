//! Data Transfer Objects

mod audit_options;
mod audit_summary;

pub use audit_options::AuditOptions;
pub use audit_summary::AuditSummary;
