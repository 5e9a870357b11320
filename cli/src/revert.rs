#![deny(missing_docs)]

//! # Revert Command
//!
//! Restores `.bru` files from the `.bak` backups written by `doc`.

use std::path::PathBuf;

use brudoc_core::{revert_workspace_with, CollectionLayout, RevertReport};

use crate::error::{CliError, CliResult};

/// Arguments for the revert command.
#[derive(clap::Args, Debug, Clone)]
pub struct RevertArgs {
    /// Path to the Bruno collection directory.
    #[clap(short = 'w', long, env = "BRUDOC_WORKSPACE")]
    pub workspace: PathBuf,
}

/// Executes the revert and prints one line per restored file plus a summary.
pub fn execute(args: &RevertArgs) -> CliResult<RevertReport> {
    if !args.workspace.is_dir() {
        return Err(CliError::Input(format!(
            "{} is not a directory.",
            args.workspace.display()
        )));
    }

    let report = revert_workspace_with(&args.workspace, &CollectionLayout::default(), |path| {
        println!("Reverted {} from backup", path.display())
    })?;

    match report.reverted_count() {
        0 => println!(
            "No Bruno backup files were reverted: no backups found or all restores failed."
        ),
        n => println!("Reverted {} Bruno files from backups.", n),
    }

    Ok(report)
}
