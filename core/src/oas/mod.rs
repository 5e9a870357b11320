#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Loading and version validation.
//! - **ref_utils**: Local `$ref` resolution.
//! - **shims**: Lenient views of operations, parameters, bodies and responses.

pub mod document;
pub(crate) mod ref_utils;
pub mod shims;

pub use document::{load_openapi, parse_openapi, OpenApiDocument};
pub use shims::HTTP_METHODS;
