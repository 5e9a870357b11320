#![deny(missing_docs)]

//! # Brudoc CLI
//!
//! Command Line Interface for copying OpenAPI documentation into Bruno
//! collections.
//!
//! Supported Commands:
//! - `doc`: Extract documentation from an OpenAPI file and update `.bru` files.
//! - `revert`: Restore `.bru` files from the `.bak` backups created by `doc`.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod doc;
mod error;
mod logging;
mod revert;

#[derive(Parser, Debug)]
#[clap(
    name = "brudoc",
    author,
    version,
    about = "Copy OpenAPI documentation into Bruno collections"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract documentation from OpenAPI file and update Bruno files.
    Doc(doc::DocArgs),
    /// Restore .bru files from .bak backups created during documentation extraction.
    Revert(revert::RevertArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and usage errors share exit status 1; only --version succeeds.
            return match e.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    logging::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Doc(args) => {
            doc::execute(args)?;
        }
        Commands::Revert(args) => {
            revert::execute(args)?;
        }
    }
    Ok(())
}
