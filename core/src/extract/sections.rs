//! # Documentation Sections
//!
//! Line-oriented writers for each documentation section. Sections are always
//! emitted in the order Description, Security, Parameters, Body, Responses.

use crate::extract::examples::{dump_block, inline_text, is_truthy};
use crate::oas::document::{key_to_string, OpenApiDocument};
use crate::oas::shims::{
    parse_shim, ShimMediaType, ShimOperation, ShimParameter, ShimProperty, ShimRequestBody,
    ShimResponse, ShimSchema,
};
use serde_yaml::{Mapping, Value};

/// Indentation applied to every line of a dumped example.
const EXAMPLE_INDENT: &str = "      ";

/// Accumulates the lines of one operation's documentation text.
pub(crate) struct SectionWriter<'a> {
    doc: &'a OpenApiDocument,
    lines: Vec<String>,
}

impl<'a> SectionWriter<'a> {
    pub(crate) fn new(doc: &'a OpenApiDocument) -> Self {
        Self {
            doc,
            lines: Vec::new(),
        }
    }

    pub(crate) fn description(&mut self, op: &ShimOperation) {
        if let Some(description) = &op.description {
            self.lines.push(format!("Description: {}\n", description));
        }
    }

    pub(crate) fn security(&mut self, op: &ShimOperation) {
        let Some(requirements) = &op.security else {
            return;
        };
        let schemes: Vec<String> = requirements
            .iter()
            .flat_map(|requirement| requirement.keys())
            .filter_map(key_to_string)
            .collect();
        if !schemes.is_empty() {
            self.lines
                .push(format!("Security: {}\n", schemes.join(", ")));
        }
    }

    pub(crate) fn parameters(&mut self, params: Option<&[ShimParameter]>) {
        let Some(params) = params else {
            return;
        };
        self.lines.push("Parameters:".to_string());
        for param in params {
            let required = if param.required {
                "required"
            } else {
                "optional"
            };
            self.lines.push(format!(
                "  * {} ({}, {}): {}",
                param.name,
                param.location,
                required,
                param.description.as_deref().unwrap_or_default()
            ));
            if let Some(example) = param.example.as_ref().filter(|e| is_truthy(e)) {
                self.lines
                    .push(format!("\n    Example: {}", inline_text(example)));
            }
        }
        self.lines.push(String::new());
    }

    pub(crate) fn body(&mut self, request_body: Option<&Value>) {
        let Some(raw) = request_body else {
            return;
        };
        self.lines.push("Body:".to_string());

        match parse_shim::<ShimRequestBody>(self.doc, raw) {
            Ok(body) => {
                for (content_type, media) in &body.content {
                    self.body_content(content_type, media);
                }
            }
            Err(e) => tracing::warn!("Ignoring unreadable request body: {}", e),
        }
        self.lines.push(String::new());
    }

    fn body_content(&mut self, content_type: &Value, media: &Value) {
        let content_type = key_to_string(content_type).unwrap_or_default();
        self.lines.push(format!("  Content-Type: {}", content_type));

        let media: ShimMediaType = match parse_shim(self.doc, media) {
            Ok(media) => media,
            Err(e) => {
                tracing::warn!("Ignoring unreadable media type {}: {}", content_type, e);
                return;
            }
        };

        if let Some(schema) = self.schema(media.schema.as_ref()) {
            if let Some(properties) = &schema.properties {
                for (name, property) in properties {
                    self.property(name, property);
                }
                if let Some(required) = &schema.required {
                    self.lines.push(format!(
                        "\n  Required body properties: {}",
                        required.join(", ")
                    ));
                }
            }
        }

        if let Some(example) = &media.example {
            self.lines.push("\n  Example:".to_string());
            self.example_block(example);
        }
    }

    fn property(&mut self, name: &Value, property: &Value) {
        let name = key_to_string(name).unwrap_or_default();
        let property: ShimProperty = parse_shim(self.doc, property).unwrap_or_default();

        let schema_type = property.schema_type.unwrap_or_default();
        let type_str = match property.format.filter(|f| !f.is_empty()) {
            Some(format) => format!("({}, {})", schema_type, format),
            None => format!("({})", schema_type),
        };
        self.lines.push(format!(
            "  * {}: {} {}",
            name,
            property.description.unwrap_or_default(),
            type_str
        ));
    }

    pub(crate) fn responses(&mut self, responses: Option<&Mapping>) {
        let Some(responses) = responses else {
            return;
        };
        self.lines.push("Responses:".to_string());

        for (status, raw) in responses {
            let status = key_to_string(status).unwrap_or_default();
            let response: ShimResponse = match parse_shim(self.doc, raw) {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable response {}: {}", status, e);
                    continue;
                }
            };
            self.lines.push(format!(
                "  * {}: {}",
                status,
                response.description.as_deref().unwrap_or_default()
            ));

            for (content_type, media) in response.content.iter().flatten() {
                let content_type = key_to_string(content_type).unwrap_or_default();
                let Ok(media) = parse_shim::<ShimMediaType>(self.doc, media) else {
                    continue;
                };
                let example = media.example.clone().or_else(|| {
                    self.schema(media.schema.as_ref())
                        .and_then(|schema| schema.example)
                });
                if let Some(example) = example {
                    self.lines
                        .push(format!("\n    Example ({}):", content_type));
                    self.lines.push(String::new());
                    self.example_block(&example);
                }
            }
        }
        self.lines.push(String::new());
    }

    fn schema(&self, schema: Option<&Value>) -> Option<ShimSchema> {
        parse_shim(self.doc, schema?).ok()
    }

    fn example_block(&mut self, example: &Value) {
        self.lines.extend(
            dump_block(example)
                .into_iter()
                .map(|line| format!("{}{}", EXAMPLE_INDENT, line)),
        );
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}
