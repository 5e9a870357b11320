//! # File Injection
//!
//! Applies [`inject_docs`](super::blocks::inject_docs) to a collection file on
//! disk, keeping a backup of the file as it was before this session touched it.

use crate::error::SkipReason;
use crate::layout::CollectionLayout;
use crate::patcher::blocks::inject_docs;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one successful injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    /// The collection file that was rewritten.
    pub path: PathBuf,
    /// Backup written by this call; `None` if the file was already backed up
    /// earlier in the session.
    pub backup: Option<PathBuf>,
}

/// Writes documentation into collection files.
///
/// The first write to a path copies it to its backup path, replacing any
/// backup left by an earlier run. Later writes to the same path within this
/// injector leave the backup alone, so it keeps the pre-run content.
#[derive(Debug, Default)]
pub struct DocInjector {
    layout: CollectionLayout,
    backed_up: HashSet<PathBuf>,
}

impl DocInjector {
    /// Creates an injector for the given file naming conventions.
    pub fn new(layout: CollectionLayout) -> Self {
        Self {
            layout,
            backed_up: HashSet::new(),
        }
    }

    /// Backs up `path` (once per session), merges `text` into it and writes it
    /// back in place.
    pub fn inject(&mut self, path: &Path, text: &str) -> Result<Injection, SkipReason> {
        let backup = if self.backed_up.contains(path) {
            None
        } else {
            let backup_path = self.layout.backup_path(path);
            fs::copy(path, &backup_path).map_err(|source| SkipReason::Io {
                path: backup_path.clone(),
                source,
            })?;
            self.backed_up.insert(path.to_path_buf());
            tracing::debug!("Backed up {} to {}", path.display(), backup_path.display());
            Some(backup_path)
        };

        let io_err = |source| SkipReason::Io {
            path: path.to_path_buf(),
            source,
        };
        let content = fs::read_to_string(path).map_err(io_err)?;
        let patched = inject_docs(&content, text);
        fs::write(path, patched).map_err(io_err)?;

        Ok(Injection {
            path: path.to_path_buf(),
            backup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_inject_writes_backup_and_patches() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Get User.bru");
        let original = "meta {\n  name: Get User\n}\n";
        fs::write(&file, original).unwrap();

        let mut injector = DocInjector::default();
        let res = injector.inject(&file, "Hello").unwrap();

        let backup = dir.path().join("Get User.bak");
        assert_eq!(res.backup.as_deref(), Some(backup.as_path()));
        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "meta {\n  name: Get User\n}\n\ndocs {\nHello\n}\n"
        );
    }

    #[test]
    fn test_second_write_keeps_first_backup() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Ping.bru");
        let original = "meta {\n  name: Ping\n}\n";
        fs::write(&file, original).unwrap();

        let mut injector = DocInjector::default();
        injector.inject(&file, "One").unwrap();
        let res = injector.inject(&file, "Two").unwrap();

        assert!(res.backup.is_none());
        assert_eq!(
            fs::read_to_string(dir.path().join("Ping.bak")).unwrap(),
            original
        );
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "meta {\n  name: Ping\n}\n\ndocs {\nOne\n\nTwo\n}\n"
        );
    }

    #[test]
    fn test_new_session_overwrites_stale_backup() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Ping.bru");
        fs::write(&file, "current").unwrap();
        fs::write(dir.path().join("Ping.bak"), "stale").unwrap();

        DocInjector::default().inject(&file, "Doc").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("Ping.bak")).unwrap(),
            "current"
        );
    }

    #[test]
    fn test_missing_file_is_skip_reason() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("Gone.bru");

        let err = DocInjector::default().inject(&file, "Doc").unwrap_err();
        assert!(matches!(err, SkipReason::Io { .. }));
        assert!(!dir.path().join("Gone.bak").exists());
    }
}
