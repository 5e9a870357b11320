//! # Block Patching
//!
//! Locates top-level blocks (`meta { ... }`, `docs { ... }`) in a Bruno file
//! and splices documentation text into them.
//!
//! Blocks are found with a shallow pattern: the body may not contain `{` or
//! `}`. A `docs` or `meta` block with nested braces is not recognized.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// A named block inside a collection file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// `docs { ... }`
    Docs,
    /// `meta { ... }`
    Meta,
}

impl Block {
    /// Byte range of the first occurrence of this block in `content`.
    pub fn find(self, content: &str) -> Option<Range<usize>> {
        self.regex().find(content).map(|m| m.range())
    }

    fn regex(self) -> &'static Regex {
        static DOCS_RE: OnceLock<Regex> = OnceLock::new();
        static META_RE: OnceLock<Regex> = OnceLock::new();
        match self {
            Block::Docs => {
                DOCS_RE.get_or_init(|| Regex::new(r"docs\s*\{[^{}]*\}").expect("Invalid regex"))
            }
            Block::Meta => {
                META_RE.get_or_init(|| Regex::new(r"meta\s*\{[^{}]*\}").expect("Invalid regex"))
            }
        }
    }
}

/// Adds `text` to the documentation block of a collection file.
///
/// * An existing `docs` block keeps its content; `text` is appended after a
///   blank line.
/// * Otherwise a new `docs` block is placed after the `meta` block, or at the
///   start of the file when there is no `meta` block.
pub fn inject_docs(content: &str, text: &str) -> String {
    if let Some(span) = Block::Docs.find(content) {
        let existing = &content[span.clone()];
        let existing = existing.strip_suffix('}').unwrap_or(existing).trim();
        let merged = format!("{}\n\n{}\n}}", existing, text);
        return splice(content, span, &merged);
    }

    let docs_block = format!("docs {{\n{}\n}}", text);
    match Block::Meta.find(content) {
        Some(span) => {
            let end = span.end;
            splice(content, end..end, &format!("\n\n{}", docs_block))
        }
        None => format!("{}\n\n{}", docs_block, content),
    }
}

fn splice(content: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..range.start]);
    out.push_str(replacement);
    out.push_str(&content[range.end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const META: &str = "meta {\n  name: Get User\n  type: http\n  seq: 1\n}";

    #[test]
    fn test_find_block_ranges() {
        let content = format!("{}\n\nget {{\n  url: x\n}}\n", META);
        assert_eq!(Block::Meta.find(&content), Some(0..META.len()));
        assert_eq!(Block::Docs.find(&content), None);
    }

    #[test]
    fn test_merges_into_existing_docs() {
        let content = "meta {\n  name: A\n}\n\ndocs {\n  Old notes\n}\n\nget {\n  url: x\n}\n";
        let res = inject_docs(content, "New text");
        assert_eq!(
            res,
            "meta {\n  name: A\n}\n\ndocs {\n  Old notes\n\nNew text\n}\n\nget {\n  url: x\n}\n"
        );
        assert_eq!(res.matches("docs {").count(), 1);
    }

    #[test]
    fn test_merge_replaces_first_block_only() {
        let content = "docs { A }\ndocs { A }\n";
        let res = inject_docs(content, "B");
        assert_eq!(res, "docs { A\n\nB\n}\ndocs { A }\n");
    }

    #[test]
    fn test_inserts_after_meta() {
        let tail = "\n\nget {\n  url: {{host}}/users\n}\n";
        let content = format!("{}{}", META, tail);
        let res = inject_docs(&content, "Hello");
        assert_eq!(res, format!("{}\n\ndocs {{\nHello\n}}{}", META, tail));
    }

    #[test]
    fn test_prepends_without_meta() {
        let content = "get {\n  url: x\n}\n";
        let res = inject_docs(content, "Hello");
        assert_eq!(res, "docs {\nHello\n}\n\nget {\n  url: x\n}\n");
    }

    #[test]
    fn test_nested_braces_in_docs_are_not_recognized() {
        // The shallow pattern cannot see a docs block containing braces, so a
        // second block is added after meta.
        let content = "meta {\n  name: A\n}\n\ndocs {\n  see {id}\n}\n";
        let res = inject_docs(content, "New");
        assert!(res.starts_with("meta {\n  name: A\n}\n\ndocs {\nNew\n}\n\ndocs {\n  see {id}\n}"));
    }
}
