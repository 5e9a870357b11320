#![deny(missing_docs)]

//! # Operation Shims
//!
//! Lenient deserialization targets for the parts of an OpenAPI operation that
//! end up in the generated documentation. Everything that may be a `$ref` is
//! kept as a raw `Value` and converted after resolution.

use crate::oas::document::OpenApiDocument;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// HTTP methods recognized as operations inside a path item.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "post", "put", "delete", "patch", "options", "head", "trace",
];

/// Operation Object subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimOperation {
    /// Tags used as collection directory names.
    pub tags: Vec<String>,
    /// Short summary, matched against collection file names.
    pub summary: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Security requirement objects (scheme name -> scopes).
    pub security: Option<Vec<Mapping>>,
    /// Parameter objects or references.
    pub parameters: Option<Vec<Value>>,
    /// Request body object or reference.
    #[serde(rename = "requestBody")]
    pub request_body: Option<Value>,
    /// Responses keyed by status code.
    pub responses: Option<Mapping>,
}

/// Parameter Object subset.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShimParameter {
    /// Name of the parameter.
    pub name: String,
    /// Location of the parameter (query, path, header, cookie).
    #[serde(rename = "in")]
    pub location: String,
    /// Whether the parameter is required.
    pub required: bool,
    /// A brief description of the parameter.
    pub description: Option<String>,
    /// Example value.
    pub example: Option<Value>,
}

/// Request Body Object subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimRequestBody {
    /// Media types keyed by content type.
    pub content: Mapping,
}

/// Media Type Object subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimMediaType {
    /// Schema object or reference.
    pub schema: Option<Value>,
    /// Example value.
    pub example: Option<Value>,
}

/// Schema Object subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimSchema {
    /// Property schemas keyed by name.
    pub properties: Option<Mapping>,
    /// Names of required properties.
    pub required: Option<Vec<String>>,
    /// Example value.
    pub example: Option<Value>,
}

/// Property schema subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimProperty {
    /// JSON Schema type.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    /// Format modifier (e.g. int64, date-time).
    pub format: Option<String>,
    /// Human description.
    pub description: Option<String>,
}

/// Response Object subset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShimResponse {
    /// Human description.
    pub description: Option<String>,
    /// Media types keyed by content type.
    pub content: Option<Mapping>,
}

/// Resolves `value` against `doc` and deserializes it.
pub fn parse_shim<T: DeserializeOwned>(
    doc: &OpenApiDocument,
    value: &Value,
) -> Result<T, serde_yaml::Error> {
    serde_yaml::from_value(doc.resolve(value).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::document::parse_openapi;

    #[test]
    fn test_operation_defaults() {
        let op: ShimOperation = serde_yaml::from_str("summary: Ping").unwrap();
        assert!(op.tags.is_empty());
        assert_eq!(op.summary.as_deref(), Some("Ping"));
        assert!(op.parameters.is_none());
        assert!(op.responses.is_none());
    }

    #[test]
    fn test_operation_rejects_scalar_tags() {
        let res = serde_yaml::from_str::<ShimOperation>("tags: Users\nsummary: X");
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_shim_resolves_refs() {
        let doc = parse_openapi(
            r#"
openapi: 3.0.0
components:
  parameters:
    Limit:
      name: limit
      in: query
      example: 10
"#,
        )
        .unwrap();
        let reference: Value = serde_yaml::from_str("$ref: '#/components/parameters/Limit'").unwrap();

        let param: ShimParameter = parse_shim(&doc, &reference).unwrap();
        assert_eq!(param.name, "limit");
        assert_eq!(param.location, "query");
        assert!(!param.required);
        assert_eq!(param.example, Some(Value::from(10)));
    }
}
