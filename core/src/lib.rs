#![deny(missing_docs)]

//! # Brudoc Core
//!
//! Core library for copying OpenAPI documentation into Bruno collections.
//!
//! The `doc` flow is: [`load_openapi`] ➜ [`extract_docs`] ➜
//! [`update_collection`] (which matches each entry to a file and patches it).
//! [`revert_workspace`] undoes it from the backups.

/// Shared error types.
pub mod error;

/// Collection file naming.
pub mod layout;

/// OpenAPI (OAS) loading utilities.
pub mod oas;

/// Documentation text extraction.
pub mod extract;

/// Operation to collection file matching.
pub mod matcher;

/// Collection file patching.
pub mod patcher;

/// Backup restoration.
pub mod revert;

pub use error::{AppError, AppResult, SkipReason};
pub use extract::{extract_docs, DocSet, OperationKey};
pub use layout::CollectionLayout;
pub use matcher::{find_collection_file, sanitize_summary, MatchOutcome};
pub use oas::{load_openapi, parse_openapi, OpenApiDocument};
pub use patcher::{
    inject_docs, update_collection, update_collection_with, DocInjector, UpdateReport,
};
pub use revert::{revert_workspace, revert_workspace_with, RevertFailure, RevertReport};
