use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::sync::Arc;
use tracing::Level;

use warden::domain::entities::ExtensionFilter;
use warden::presentation::cli::{self, AuditArgs, Cli, Commands, ConsoleReporter, KeywordArgs};
use warden::{AuditTreeUseCase, Classifier, LocalVaultWriter, LossyTextReader};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug);

    match cli.command {
        Some(Commands::Audit(args)) => run_audit(&args),
        Some(Commands::Keywords { keywords, json }) => list_keywords(&keywords, json),
        None => run_interactive_wizard(),
    }
}

fn init_tracing(verbose: bool, debug: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_interactive_wizard() -> Result<()> {
    print_banner();
    run_audit(&AuditArgs::default())
}

fn run_audit(args: &AuditArgs) -> Result<()> {
    let (source, dest) = cli::resolve_paths(args)?;

    let classifier =
        Classifier::from_config(&args.keywords.config()).context("Invalid keyword list")?;
    let use_case =
        AuditTreeUseCase::new(Arc::new(classifier), LossyTextReader::new(), args.options());

    let reporter = if args.json {
        ConsoleReporter::for_json()
    } else {
        ConsoleReporter::new()
    };
    let summary = use_case.execute::<LocalVaultWriter>(&source, &dest, &reporter)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", json);
    }

    Ok(())
}

fn list_keywords(args: &KeywordArgs, json: bool) -> Result<()> {
    let config = args.config();

    if json {
        let json = serde_json::to_string_pretty(&config).context("Failed to encode keywords")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{}", style("Noise keywords (checked first):").yellow().bold());
    for keyword in &config.noise {
        println!("  {}", keyword);
    }
    println!();
    println!("{}", style("Signal keywords:").green().bold());
    for keyword in &config.signal {
        println!("  {}", keyword);
    }
    println!();

    let extensions: Vec<String> = ExtensionFilter::default()
        .extensions()
        .map(|ext| format!(".{}", ext))
        .collect();
    println!("{} {}", style("Scanned extensions:").cyan().bold(), extensions.join(" "));

    Ok(())
}

fn print_banner() {
    println!();
    println!("{}", style("Warden - Provenance Audit").cyan().bold());
    println!();
}
