#![deny(missing_docs)]

//! # Doc Command
//!
//! Extracts documentation from an OpenAPI file and writes it into the
//! matching Bruno `.bru` files, leaving a `.bak` backup next to each file.

use std::path::PathBuf;

use brudoc_core::{
    extract_docs, load_openapi, update_collection_with, CollectionLayout, UpdateReport,
};

use crate::error::{CliError, CliResult};

/// Arguments for the doc command.
#[derive(clap::Args, Debug, Clone)]
pub struct DocArgs {
    /// Path to the OpenAPI 3.0 specification file.
    #[clap(short = 'o', long, env = "BRUDOC_OPENAPI")]
    pub openapi: PathBuf,

    /// Path to the Bruno collection directory.
    #[clap(short = 'w', long, env = "BRUDOC_WORKSPACE")]
    pub workspace: PathBuf,
}

/// Executes the documentation update.
///
/// Returns the report so callers can inspect what was written; the report
/// has already been printed.
pub fn execute(args: &DocArgs) -> CliResult<UpdateReport> {
    if !args.openapi.is_file() {
        return Err(CliError::Input(format!(
            "{} is not a file.",
            args.openapi.display()
        )));
    }
    if !args.workspace.is_dir() {
        return Err(CliError::Input(format!(
            "{} is not a directory.",
            args.workspace.display()
        )));
    }

    let document = load_openapi(&args.openapi)?;
    let docs = extract_docs(&document);
    if docs.is_empty() {
        return Err(CliError::Input(
            "No documentation found in OpenAPI file.".to_string(),
        ));
    }

    let report = update_collection_with(
        &docs,
        &args.workspace,
        &CollectionLayout::default(),
        |path| println!("Updated {}", path.display()),
    )?;
    println!("Documentation extraction and Bruno file update completed.");

    Ok(report)
}
