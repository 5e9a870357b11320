//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace, plus the
//! per-item `SkipReason` recorded when a single operation cannot be applied.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The input is not valid YAML.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The input parsed but is not an OpenAPI 3.0 document.
    #[from(ignore)]
    #[display("Format Error: {_0}")]
    Format(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Why a single documentation entry was not written.
///
/// These never abort a batch; they are logged and collected in reports.
#[derive(Debug, Display)]
pub enum SkipReason {
    /// `<workspace>/<tag>` is not a directory.
    #[display("Tag directory {} does not exist", _0.display())]
    MissingTagDir(PathBuf),

    /// No collection file name contains the sanitized summary.
    #[display("No matching .{ext} file found in {}", dir.display())]
    NoMatch {
        /// Directory that was searched.
        dir: PathBuf,
        /// Extension of the candidate files.
        ext: String,
    },

    /// Listing, reading, copying or writing failed.
    #[display("I/O failure on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

impl std::error::Error for SkipReason {}
