//! CLI commands using clap

use crate::application::AuditOptions;
use crate::domain::services::KeywordConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Warden - Provenance Audit
///
/// Sorts an extracted data export (e.g. Google Takeout) into signal, noise
/// and neutral files, and copies the signal into a provenance vault.
/// Without a subcommand, the source and destination are asked for
/// interactively.
#[derive(Parser)]
#[command(name = "warden")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Secure the signal of a personal data export", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a directory tree and copy signal files into the vault
    Audit(AuditArgs),

    /// List the active keywords and scanned extensions
    Keywords {
        #[command(flatten)]
        keywords: KeywordArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct AuditArgs {
    /// Extracted export to scan (prompted for when omitted)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Destination root; the vault is created inside it (prompted for when omitted)
    #[arg(short = 'o', long)]
    pub dest: Option<PathBuf>,

    /// Classify and copy files on a worker pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker count for --parallel (defaults to the number of CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Extensions to scan instead of txt,json,html,md,eml
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub keywords: KeywordArgs,
}

impl AuditArgs {
    pub fn options(&self) -> AuditOptions {
        let mut options = AuditOptions::default();
        if let Some(extensions) = &self.extensions {
            options = options.with_extensions(extensions.iter().cloned());
        }
        if self.parallel {
            options = options.parallel();
        }
        if let Some(threads) = self.threads {
            options = options.with_threads(threads);
        }
        options
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct KeywordArgs {
    /// Additional signal keywords
    #[arg(long, value_delimiter = ',')]
    pub extra_signal: Vec<String>,

    /// Additional noise keywords
    #[arg(long, value_delimiter = ',')]
    pub extra_noise: Vec<String>,
}

impl KeywordArgs {
    /// Built-in keywords plus the extras given on the command line
    pub fn config(&self) -> KeywordConfig {
        KeywordConfig::default()
            .with_extra_signal(self.extra_signal.iter().cloned())
            .with_extra_noise(self.extra_noise.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_audit_args_map_to_options() {
        let cli = Cli::parse_from([
            "warden", "audit", "-s", "in", "-o", "out", "--parallel", "-j", "3", "-e", "TXT,csv",
        ]);
        let Some(Commands::Audit(args)) = cli.command else {
            panic!("expected audit subcommand");
        };

        let options = args.options();
        assert!(options.parallel);
        assert_eq!(options.thread_count, 3);
        assert_eq!(options.extensions, vec!["TXT".to_string(), "csv".to_string()]);
        assert_eq!(args.source, Some(PathBuf::from("in")));
        assert_eq!(args.dest, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_extra_keywords_are_appended() {
        let cli = Cli::parse_from([
            "warden",
            "keywords",
            "--extra-signal",
            "Genealogy,Deed",
            "--extra-noise",
            "Newsletter",
        ]);
        let Some(Commands::Keywords { keywords, .. }) = cli.command else {
            panic!("expected keywords subcommand");
        };

        let config = keywords.config();
        assert_eq!(config.signal.last().map(String::as_str), Some("Deed"));
        assert_eq!(config.noise.last().map(String::as_str), Some("Newsletter"));
        assert_eq!(config.signal.len(), 17);
    }

    #[test]
    fn test_no_subcommand_means_wizard() {
        let cli = Cli::parse_from(["warden", "-v"]);
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }
}
