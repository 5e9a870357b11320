#![deny(missing_docs)]

//! # Documentation Extraction
//!
//! Walks every operation of an OpenAPI document and renders its documentation
//! text, keyed by tag, method, path and summary.
//!
//! - **sections**: Writers for the Description, Security, Parameters, Body and
//!   Responses sections.
//! - **examples**: Rendering of example values.

mod examples;
mod sections;

use crate::oas::document::{key_to_string, OpenApiDocument};
use crate::oas::shims::{parse_shim, ShimOperation, ShimParameter, HTTP_METHODS};
use indexmap::IndexMap;
use sections::SectionWriter;
use serde_yaml::{Mapping, Value};
use std::fmt;

/// Identifies one documented operation under one tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    /// Tag, used as the collection directory name.
    pub tag: String,
    /// Upper-case HTTP method.
    pub method: String,
    /// Path template, e.g. `/users/{id}`.
    pub path: String,
    /// Operation summary, matched against collection file names.
    pub summary: String,
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Documentation text for every extracted operation, in document order.
#[derive(Debug, Clone, Default)]
pub struct DocSet {
    entries: IndexMap<OperationKey, String>,
    warnings: Vec<String>,
}

impl DocSet {
    /// Number of stored entries (one per operation tag).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text stored for `key`.
    pub fn get(&self, key: &OperationKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&OperationKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Operations that were skipped, one message each.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn warn(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

/// Extracts documentation text for every tagged, summarized operation.
///
/// Operations without tags or summary are skipped with a warning. An operation
/// with several tags yields one entry per tag, all sharing the same text.
pub fn extract_docs(doc: &OpenApiDocument) -> DocSet {
    let mut set = DocSet::default();

    for (path, path_item) in doc.paths() {
        for (method, raw_op) in path_item {
            let Some(method) = method.as_str().filter(|m| HTTP_METHODS.contains(m)) else {
                continue;
            };
            let method = method.to_uppercase();

            let op: ShimOperation = match serde_yaml::from_value(raw_op.clone()) {
                Ok(op) => op,
                Err(e) => {
                    set.warn(format!("Unreadable operation {} {}: {}", method, path, e));
                    continue;
                }
            };

            let summary = op.summary.clone().unwrap_or_default();
            if op.tags.is_empty() || summary.is_empty() {
                set.warn(format!("Missing tags or summary for {} {}", method, path));
                continue;
            }

            let parameters = collect_parameters(doc, path_item, &op);
            let text = render_operation(doc, &op, parameters.as_deref());

            for tag in &op.tags {
                let key = OperationKey {
                    tag: tag.clone(),
                    method: method.clone(),
                    path: path.clone(),
                    summary: summary.clone(),
                };
                tracing::debug!("Extracted docs for {} under tag {}", key, tag);
                set.entries.insert(key, text.clone());
            }
        }
    }

    set
}

fn render_operation(
    doc: &OpenApiDocument,
    op: &ShimOperation,
    parameters: Option<&[ShimParameter]>,
) -> String {
    let mut writer = SectionWriter::new(doc);
    writer.description(op);
    writer.security(op);
    writer.parameters(parameters);
    writer.body(op.request_body.as_ref());
    writer.responses(op.responses.as_ref());
    writer.finish()
}

/// Merges path-item parameters with operation parameters.
///
/// Path-level parameters come first; an operation parameter with the same
/// name and location replaces its path-level counterpart in place. Returns
/// `None` when neither level declares `parameters`.
fn collect_parameters(
    doc: &OpenApiDocument,
    path_item: &Mapping,
    op: &ShimOperation,
) -> Option<Vec<ShimParameter>> {
    let shared = path_item.get("parameters").and_then(Value::as_sequence);
    if shared.is_none() && op.parameters.is_none() {
        return None;
    }

    let mut merged: Vec<ShimParameter> = resolve_parameters(doc, shared.into_iter().flatten());
    for param in resolve_parameters(doc, op.parameters.iter().flatten()) {
        match merged
            .iter_mut()
            .find(|p| p.name == param.name && p.location == param.location)
        {
            Some(existing) => *existing = param,
            None => merged.push(param),
        }
    }
    Some(merged)
}

fn resolve_parameters<'a>(
    doc: &OpenApiDocument,
    raw: impl Iterator<Item = &'a Value>,
) -> Vec<ShimParameter> {
    raw.filter_map(|value| match parse_shim::<ShimParameter>(doc, value) {
        Ok(param) => Some(param),
        Err(e) => {
            let hint = value
                .get("name")
                .and_then(key_to_string)
                .unwrap_or_else(|| "<unnamed>".to_string());
            tracing::warn!("Ignoring unreadable parameter {}: {}", hint, e);
            None
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::document::parse_openapi;
    use pretty_assertions::assert_eq;

    fn key(tag: &str, method: &str, path: &str, summary: &str) -> OperationKey {
        OperationKey {
            tag: tag.into(),
            method: method.into(),
            path: path.into(),
            summary: summary.into(),
        }
    }

    #[test]
    fn test_full_operation_section_order() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.1
paths:
  /users:
    post:
      tags: [Users]
      summary: Create User
      description: Creates a user.
      security:
        - bearerAuth: []
      parameters:
        - name: dryRun
          in: query
          description: Validate only
          example: true
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name: { type: string, description: Name }
      responses:
        '201':
          description: Created
"#,
        )
        .unwrap();

        let docs = extract_docs(&doc);
        assert_eq!(docs.len(), 1);
        assert_eq!(
            docs.get(&key("Users", "POST", "/users", "Create User")).unwrap(),
            "Description: Creates a user.\n\
             \n\
             Security: bearerAuth\n\
             \n\
             Parameters:\n  * dryRun (query, optional): Validate only\n\n    Example: true\n\
             \n\
             Body:\n  Content-Type: application/json\n  * name: Name (string)\n\
             \n\
             Responses:\n  * 201: Created\n"
        );
    }

    #[test]
    fn test_one_entry_per_tag() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
paths:
  /pets:
    get:
      tags: [Pets, Animals]
      summary: List Pets
      responses:
        200: { description: OK }
"#,
        )
        .unwrap();

        let docs = extract_docs(&doc);
        assert_eq!(docs.len(), 2);
        let pets = docs.get(&key("Pets", "GET", "/pets", "List Pets")).unwrap();
        let animals = docs
            .get(&key("Animals", "GET", "/pets", "List Pets"))
            .unwrap();
        assert_eq!(pets, animals);
        assert_eq!(pets, "Responses:\n  * 200: OK\n");
    }

    #[test]
    fn test_missing_tags_or_summary_warns_once_each() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
paths:
  /a:
    get:
      summary: No tags
  /b:
    get:
      tags: [B]
  /c:
    delete:
      tags: [C]
      summary: ''
"#,
        )
        .unwrap();

        let docs = extract_docs(&doc);
        assert!(docs.is_empty());
        assert_eq!(
            docs.warnings(),
            &[
                "Missing tags or summary for GET /a".to_string(),
                "Missing tags or summary for GET /b".to_string(),
                "Missing tags or summary for DELETE /c".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_method_keys_are_skipped() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
paths:
  /things:
    summary: Things
    parameters:
      - name: x
        in: query
    x-internal: true
    get:
      tags: [Things]
      summary: List Things
"#,
        )
        .unwrap();

        let docs = extract_docs(&doc);
        assert_eq!(docs.len(), 1);
        assert!(docs.warnings().is_empty());
    }

    #[test]
    fn test_unreadable_operation_is_skipped() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
paths:
  /bad:
    get:
      tags: Users
      summary: Bad
"#,
        )
        .unwrap();

        let docs = extract_docs(&doc);
        assert!(docs.is_empty());
        assert_eq!(docs.warnings().len(), 1);
    }

    #[test]
    fn test_path_level_parameters_are_merged() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
components:
  parameters:
    Verbose:
      name: verbose
      in: query
      description: Extra output
paths:
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
        description: Generic id
      - $ref: '#/components/parameters/Verbose'
    get:
      tags: [Users]
      summary: Get User
      parameters:
        - name: id
          in: path
          required: true
          description: User ID
        - name: fields
          in: query
"#,
        )
        .unwrap();

        let docs = extract_docs(&doc);
        assert_eq!(
            docs.get(&key("Users", "GET", "/users/{id}", "Get User"))
                .unwrap(),
            "Parameters:\n  * id (path, required): User ID\n  * verbose (query, optional): Extra output\n  * fields (query, optional): \n"
        );
    }

    #[test]
    fn test_entries_follow_document_order() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
paths:
  /z:
    put: { tags: [Z], summary: Put Z }
    get: { tags: [Z], summary: Get Z }
  /a:
    get: { tags: [A], summary: Get A }
"#,
        )
        .unwrap();

        let order: Vec<String> = extract_docs(&doc)
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(order, vec!["PUT /z", "GET /z", "GET /a"]);
    }
}
