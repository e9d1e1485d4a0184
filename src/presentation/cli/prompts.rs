//! Interactive prompts for paths missing from the command line

use super::commands::AuditArgs;
use anyhow::{Context, Result};
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

const SOURCE_PROMPT: &str = "Enter path to extracted Google Takeout folder";
const DEST_PROMPT: &str = "Enter path to save Provenance (e.g. ./KERNEL/_vault)";

/// Source and destination roots, prompting for whichever was not given
pub fn resolve_paths(args: &AuditArgs) -> Result<(PathBuf, PathBuf)> {
    let theme = ColorfulTheme::default();

    let source = match &args.source {
        Some(path) => path.clone(),
        None => prompt_path(&theme, SOURCE_PROMPT)?,
    };
    let dest = match &args.dest {
        Some(path) => path.clone(),
        None => prompt_path(&theme, DEST_PROMPT)?,
    };

    Ok((source, dest))
}

fn prompt_path(theme: &ColorfulTheme, prompt: &str) -> Result<PathBuf> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .context("Failed to read path")?;

    Ok(PathBuf::from(answer.trim()))
}
