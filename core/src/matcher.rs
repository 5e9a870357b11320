#![deny(missing_docs)]

//! # Collection File Matching
//!
//! Maps an extracted operation to the Bruno file that documents it: the file
//! lives in `<workspace>/<tag>/` and its name contains the operation summary
//! (stripped to letters, digits and spaces, compared case-insensitively).
//!
//! When several files match, the first one in directory listing order wins.
//! That order is whatever the filesystem returns.

use crate::error::SkipReason;
use crate::extract::OperationKey;
use crate::layout::CollectionLayout;
use std::fs;
use std::path::{Path, PathBuf};

/// A matched collection file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The chosen file.
    pub path: PathBuf,
    /// How many files matched in total (more than one means the choice was ambiguous).
    pub candidates: usize,
}

impl MatchOutcome {
    /// True when more than one file matched.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates > 1
    }
}

/// Removes every character outside `[A-Za-z0-9 ]` and trims the result.
pub fn sanitize_summary(summary: &str) -> String {
    summary
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Finds the collection file for `key` inside `workspace`.
pub fn find_collection_file(
    workspace: &Path,
    key: &OperationKey,
    layout: &CollectionLayout,
) -> Result<MatchOutcome, SkipReason> {
    let tag_dir = workspace.join(&key.tag);
    if !tag_dir.is_dir() {
        return Err(SkipReason::MissingTagDir(tag_dir));
    }

    let needle = sanitize_summary(&key.summary).to_lowercase();
    tracing::debug!("Looking for '{}' in {}", needle, tag_dir.display());

    let entries = fs::read_dir(&tag_dir).map_err(|source| SkipReason::Io {
        path: tag_dir.clone(),
        source,
    })?;

    let matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && layout.is_working_file(path))
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name.to_string_lossy().to_lowercase().contains(&needle))
        })
        .collect();

    let candidates = matches.len();
    let Some(path) = matches.into_iter().next() else {
        return Err(SkipReason::NoMatch {
            dir: tag_dir,
            ext: layout.working_ext.clone(),
        });
    };

    if candidates > 1 {
        tracing::warn!(
            "Multiple matching .{} files found for {} in {}, using first match {}",
            layout.working_ext,
            key,
            tag_dir.display(),
            path.display()
        );
    }

    Ok(MatchOutcome { path, candidates })
}
