#![deny(missing_docs)]

//! # Collection Patching
//!
//! Utilities for writing documentation into Bruno collection files.
//!
//! - **blocks**: Locating `meta`/`docs` blocks and splicing text into them.
//! - **files**: Backing up and rewriting a single file.
//! - **workflows**: Matching and patching a whole documentation set.

/// Block-level text patching.
pub mod blocks;

/// File-level patching with backups.
pub mod files;

/// High-level patching workflows.
pub mod workflows;

pub use blocks::{inject_docs, Block};
pub use files::{DocInjector, Injection};
pub use workflows::{update_collection, update_collection_with, SkippedEntry, UpdateReport};
