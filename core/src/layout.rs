//! # Collection Layout
//!
//! File naming conventions of a Bruno collection: which extension marks a
//! request file and which one marks its backup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extension pair used to recognize collection files and their backups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLayout {
    /// Extension of working collection files, without the dot.
    pub working_ext: String,
    /// Extension of backup files, without the dot.
    pub backup_ext: String,
}

impl Default for CollectionLayout {
    fn default() -> Self {
        Self {
            working_ext: "bru".into(),
            backup_ext: "bak".into(),
        }
    }
}

impl CollectionLayout {
    /// True if `path` names a working collection file.
    pub fn is_working_file(&self, path: &Path) -> bool {
        has_extension(path, &self.working_ext)
    }

    /// True if `path` names a backup file.
    pub fn is_backup_file(&self, path: &Path) -> bool {
        has_extension(path, &self.backup_ext)
    }

    /// `Users/Get User.bru` -> `Users/Get User.bak`
    pub fn backup_path(&self, working: &Path) -> PathBuf {
        working.with_extension(&self.backup_ext)
    }

    /// `Users/Get User.bak` -> `Users/Get User.bru`
    pub fn working_path(&self, backup: &Path) -> PathBuf {
        backup.with_extension(&self.working_ext)
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(ext)
}
