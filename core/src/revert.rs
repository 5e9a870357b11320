#![deny(missing_docs)]

//! # Revert
//!
//! Restores collection files from the backups left next to them by the
//! documentation workflow. Backups are kept, so reverting twice is harmless.

use crate::error::{AppError, AppResult};
use crate::layout::CollectionLayout;
use derive_more::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A backup that could not be restored.
#[derive(Debug, Display)]
pub enum RevertFailure {
    /// The backup has no working file next to it.
    #[display("Original file {} not found for backup {}", working.display(), backup.display())]
    MissingWorkingFile {
        /// The backup file found.
        backup: PathBuf,
        /// The working file it should restore.
        working: PathBuf,
    },

    /// Copying the backup over the working file failed.
    #[display("Error reverting {}: {source}", working.display())]
    Copy {
        /// The working file being restored.
        working: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A directory entry could not be read during the walk.
    #[display("Error walking workspace: {_0}")]
    Walk(walkdir::Error),
}

/// Outcome of a revert run.
#[derive(Debug, Default)]
pub struct RevertReport {
    /// Working files overwritten from their backups, in walk order.
    pub restored: Vec<PathBuf>,
    /// Backups that were found but not restored.
    pub failures: Vec<RevertFailure>,
}

impl RevertReport {
    /// Number of files successfully reverted.
    pub fn reverted_count(&self) -> usize {
        self.restored.len()
    }
}

/// Restores every working file under `workspace` from its backup.
///
/// # Errors
///
/// Fails only if `workspace` is not a directory. Per-file problems are
/// collected in [`RevertReport::failures`].
pub fn revert_workspace(workspace: &Path, layout: &CollectionLayout) -> AppResult<RevertReport> {
    revert_workspace_with(workspace, layout, |_| {})
}

/// Like [`revert_workspace`], calling `on_restored` with each working file as soon as it is restored.
pub fn revert_workspace_with(
    workspace: &Path,
    layout: &CollectionLayout,
    mut on_restored: impl FnMut(&Path),
) -> AppResult<RevertReport> {
    if !workspace.is_dir() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", workspace.display()),
        )));
    }

    let mut report = RevertReport::default();

    for entry in WalkDir::new(workspace).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!("Error walking workspace: {}", e);
                report.failures.push(RevertFailure::Walk(e));
                continue;
            }
        };
        let backup = entry.path();
        if !entry.file_type().is_file() || !layout.is_backup_file(backup) {
            continue;
        }

        let working = layout.working_path(backup);
        if !working.exists() {
            let failure = RevertFailure::MissingWorkingFile {
                backup: backup.to_path_buf(),
                working,
            };
            tracing::warn!("{}", failure);
            report.failures.push(failure);
            continue;
        }

        match fs::copy(backup, &working) {
            Ok(_) => {
                tracing::info!("Reverted {} from backup", working.display());
                on_restored(&working);
                report.restored.push(working);
            }
            Err(source) => {
                let failure = RevertFailure::Copy { working, source };
                tracing::error!("{}", failure);
                report.failures.push(failure);
            }
        }
    }

    Ok(report)
}
