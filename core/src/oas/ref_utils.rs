#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Resolution of local `$ref` pointers (`#/components/...`) inside a YAML
//! document. External documents are never fetched.

use serde_yaml::{Mapping, Value};

/// Upper bound on chained references, also guards against cycles.
const MAX_REF_DEPTH: usize = 16;

/// Follows `$ref` chains from `value` through `root`.
///
/// Stops at the first value that is not a local reference, or returns the last
/// reference object reached when a target is missing or the chain is too long.
pub(crate) fn resolve_local_ref<'a>(root: &'a Mapping, value: &'a Value) -> &'a Value {
    let mut current = value;
    for _ in 0..MAX_REF_DEPTH {
        let Some(pointer) = ref_target(current) else {
            return current;
        };
        match lookup_pointer(root, pointer) {
            Some(target) => current = target,
            None => return current,
        }
    }
    current
}

/// Returns the pointer part of a local reference object, e.g. `/components/schemas/User`.
fn ref_target(value: &Value) -> Option<&str> {
    value
        .as_mapping()?
        .get("$ref")?
        .as_str()?
        .strip_prefix('#')
        .filter(|pointer| pointer.starts_with('/'))
}

/// Walks a JSON Pointer (RFC 6901) through a YAML mapping.
fn lookup_pointer<'a>(root: &'a Mapping, pointer: &str) -> Option<&'a Value> {
    let mut segments = pointer.split('/').skip(1).map(decode_pointer_segment);

    let first = segments.next()?;
    let mut current = root.get(first.as_str())?;

    for segment in segments {
        current = match current {
            Value::Mapping(map) => map
                .get(segment.as_str())
                .or_else(|| segment.parse::<i64>().ok().and_then(|n| map.get(Value::from(n))))?,
            Value::Sequence(seq) => seq.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_resolves_component_reference() {
        let root = root(
            r#"
components:
  parameters:
    UserId:
      name: id
      in: path
"#,
        );
        let reference: Value = serde_yaml::from_str("$ref: '#/components/parameters/UserId'").unwrap();

        let resolved = resolve_local_ref(&root, &reference);
        assert_eq!(resolved.get("name").and_then(Value::as_str), Some("id"));
    }

    #[test]
    fn test_follows_chains() {
        let root = root(
            r#"
components:
  schemas:
    Alias:
      $ref: '#/components/schemas/User'
    User:
      type: object
"#,
        );
        let reference: Value = serde_yaml::from_str("$ref: '#/components/schemas/Alias'").unwrap();

        let resolved = resolve_local_ref(&root, &reference);
        assert_eq!(resolved.get("type").and_then(Value::as_str), Some("object"));
    }

    #[test]
    fn test_cycles_terminate() {
        let root = root(
            r#"
components:
  schemas:
    A: { $ref: '#/components/schemas/B' }
    B: { $ref: '#/components/schemas/A' }
"#,
        );
        let reference: Value = serde_yaml::from_str("$ref: '#/components/schemas/A'").unwrap();

        let resolved = resolve_local_ref(&root, &reference);
        assert!(resolved.get("$ref").is_some());
    }

    #[test]
    fn test_unresolvable_and_external_refs_are_returned_as_is() {
        let root = root("components: {}\n");
        let missing: Value = serde_yaml::from_str("$ref: '#/components/schemas/Nope'").unwrap();
        let external: Value = serde_yaml::from_str("$ref: 'other.yaml#/Thing'").unwrap();

        assert_eq!(resolve_local_ref(&root, &missing), &missing);
        assert_eq!(resolve_local_ref(&root, &external), &external);
    }

    #[test]
    fn test_escaped_segments_and_numeric_keys() {
        let root = root(
            r#"
paths:
  /users/{id}:
    get:
      responses:
        200:
          description: OK
"#,
        );
        let reference: Value =
            serde_yaml::from_str("$ref: '#/paths/~1users~1{id}/get/responses/200'").unwrap();

        let resolved = resolve_local_ref(&root, &reference);
        assert_eq!(
            resolved.get("description").and_then(Value::as_str),
            Some("OK")
        );
    }

    #[test]
    fn test_decode_pointer_segment() {
        assert_eq!(decode_pointer_segment("a~1b~0c"), "a/b~c");
    }
}
