//! CLI module

mod commands;
mod prompts;
mod reporter;

pub use commands::{AuditArgs, Cli, Commands, KeywordArgs};
pub use prompts::resolve_paths;
pub use reporter::{ConsoleReporter, summary_lines};
