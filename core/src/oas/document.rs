#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Reads an OpenAPI file from disk, parses it as YAML and confirms it declares
//! an OpenAPI 3.0.x version. The document is kept as an ordered YAML mapping so
//! that path, method and response order survive into the generated text.

use crate::error::{AppError, AppResult};
use crate::oas::ref_utils::resolve_local_ref;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Version prefix accepted in the root `openapi` field.
const SUPPORTED_VERSION_PREFIX: &str = "3.0";

/// A parsed and version-checked OpenAPI document.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenApiDocument {
    root: Mapping,
}

impl OpenApiDocument {
    /// The raw root mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Value of the root `openapi` field.
    pub fn version(&self) -> &str {
        self.root
            .get("openapi")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Iterates `paths` in document order. Non-mapping path items are skipped.
    pub fn paths(&self) -> impl Iterator<Item = (String, &Mapping)> + '_ {
        self.root
            .get("paths")
            .and_then(Value::as_mapping)
            .into_iter()
            .flat_map(|paths| paths.iter())
            .filter_map(|(path, item)| Some((key_to_string(path)?, item.as_mapping()?)))
    }

    /// Follows local `$ref` pointers starting at `value`.
    ///
    /// Returns `value` itself when it is not a reference or when the
    /// reference cannot be resolved within this document.
    pub fn resolve<'a>(&'a self, value: &'a Value) -> &'a Value {
        resolve_local_ref(&self.root, value)
    }
}

/// Loads and validates an OpenAPI document from `path`.
///
/// # Errors
///
/// * `AppError::Io` if the file cannot be read.
/// * `AppError::Parse` if it is not valid YAML.
/// * `AppError::Format` if it is not an OpenAPI 3.0 document.
pub fn load_openapi(path: &Path) -> AppResult<OpenApiDocument> {
    let content = fs::read_to_string(path)?;
    parse_openapi(&content).map_err(|e| match e {
        AppError::Parse(msg) => AppError::Parse(format!(
            "{} is not a valid YAML file: {}",
            path.display(),
            msg
        )),
        AppError::Format(msg) => AppError::Format(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parses and validates OpenAPI YAML content.
pub fn parse_openapi(yaml_content: &str) -> AppResult<OpenApiDocument> {
    let value: Value =
        serde_yaml::from_str(yaml_content).map_err(|e| AppError::Parse(e.to_string()))?;

    let Value::Mapping(root) = value else {
        return Err(AppError::Format(
            "document root is not a mapping".to_string(),
        ));
    };

    match root.get("openapi") {
        Some(Value::String(version)) if version.starts_with(SUPPORTED_VERSION_PREFIX) => {
            Ok(OpenApiDocument { root })
        }
        Some(Value::String(version)) => Err(AppError::Format(format!(
            "not an OpenAPI v3.0 specification (found version '{}')",
            version
        ))),
        Some(_) => Err(AppError::Format(
            "the 'openapi' field must be a string".to_string(),
        )),
        None => Err(AppError::Format(
            "not an OpenAPI v3.0 specification (missing 'openapi' field)".to_string(),
        )),
    }
}

/// Renders a YAML mapping key as text. Status codes are often bare integers.
pub(crate) fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
