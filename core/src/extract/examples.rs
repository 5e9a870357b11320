//! # Example Rendering
//!
//! Turns example values from the OpenAPI document into text.

use crate::oas::document::key_to_string;
use serde_yaml::{Mapping, Value};
use std::cmp::Ordering;

/// Dumps `value` as block-style YAML with mapping keys sorted, one entry per line.
pub(crate) fn dump_block(value: &Value) -> Vec<String> {
    let sorted = sort_keys(value);
    match serde_yaml::to_string(&sorted) {
        Ok(text) => {
            let mut lines: Vec<String> = text.trim().split('\n').map(str::to_string).collect();
            // A lone `...` line is a document end marker, never content.
            if lines.len() > 1 && lines.last().is_some_and(|line| line == "...") {
                lines.pop();
            }
            lines
        }
        Err(e) => {
            tracing::warn!("Could not render example as YAML: {}", e);
            Vec::new()
        }
    }
}

/// Single-line rendering used for parameter examples.
pub(crate) fn inline_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => inline_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_json::to_string(value)
            .unwrap_or_else(|_| dump_block(value).join(" ")),
    }
}

/// Whether an example carries something worth printing.
///
/// `null`, `false`, zero and empty strings/collections do not.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut entries: Vec<(Value, Value)> = map
                .iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            Value::Mapping(entries.into_iter().collect::<Mapping>())
        }
        Value::Sequence(seq) => Value::Sequence(seq.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Numbers compare by value, everything else by its string form.
fn compare_keys(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => x
                .as_f64()
                .partial_cmp(&y.as_f64())
                .unwrap_or(Ordering::Equal),
        },
        _ => key_to_string(a)
            .unwrap_or_default()
            .cmp(&key_to_string(b).unwrap_or_default()),
    }
}
