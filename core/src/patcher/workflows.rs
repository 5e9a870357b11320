use crate::error::{AppError, AppResult, SkipReason};
use crate::extract::{DocSet, OperationKey};
use crate::layout::CollectionLayout;
use crate::matcher::find_collection_file;
use crate::patcher::files::DocInjector;
use std::io;
use std::path::{Path, PathBuf};

/// An extracted entry that was not written.
#[derive(Debug)]
pub struct SkippedEntry {
    /// The operation whose documentation was dropped.
    pub key: OperationKey,
    /// Why it was dropped.
    pub reason: SkipReason,
}

/// Outcome of [`update_collection`].
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Files written, in write order. A file appears once per entry merged into it.
    pub updated: Vec<PathBuf>,
    /// Entries whose target file was written although several files matched.
    pub ambiguous: Vec<OperationKey>,
    /// Entries that were not written.
    pub skipped: Vec<SkippedEntry>,
}

/// Writes every entry of `docs` into its matching collection file under `workspace`.
///
/// Entries with several tags are written to each tag's file independently.
/// Per-entry failures are logged and collected; they never stop the batch.
pub fn update_collection(
    docs: &DocSet,
    workspace: &Path,
    layout: &CollectionLayout,
) -> AppResult<UpdateReport> {
    update_collection_with(docs, workspace, layout, |_| {})
}

/// Like [`update_collection`], calling `on_updated` with each file as soon as it is written.
pub fn update_collection_with(
    docs: &DocSet,
    workspace: &Path,
    layout: &CollectionLayout,
    mut on_updated: impl FnMut(&Path),
) -> AppResult<UpdateReport> {
    if !workspace.is_dir() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "Bruno collection directory {} does not exist",
                workspace.display()
            ),
        )));
    }

    let mut injector = DocInjector::new(layout.clone());
    let mut report = UpdateReport::default();

    for (key, text) in docs.iter() {
        let result = find_collection_file(workspace, key, layout).and_then(|found| {
            if found.is_ambiguous() {
                report.ambiguous.push(key.clone());
            }
            injector.inject(&found.path, text)
        });

        match result {
            Ok(injection) => {
                tracing::info!("Updated {}", injection.path.display());
                on_updated(&injection.path);
                report.updated.push(injection.path);
            }
            Err(reason) => {
                match &reason {
                    SkipReason::Io { .. } => tracing::error!("Skipping {}: {}", key, reason),
                    _ => tracing::warn!("Skipping {}: {}", key, reason),
                }
                report.skipped.push(SkippedEntry {
                    key: key.clone(),
                    reason,
                });
            }
        }
    }

    Ok(report)
}
