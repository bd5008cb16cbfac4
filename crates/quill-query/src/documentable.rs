//! Resolve a cursor position to the enclosing documentable node.
//!
//! A documentable node is the innermost `range.*` capture whose span contains
//! the cursor. Its `symbol.*` capture (the name) is reported only when the
//! cursor is on the name itself, so a cursor deep inside a function body still
//! resolves to the function without claiming the user is on its name.

use quill_core::{CaptureKind, Language, Point, Span};
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::captures::{Capture, raw_matches};
use crate::error::QueryError;
use crate::parser::ParsedSource;
use crate::queries::QueryName;

/// Node kinds that wrap a documentable construct; a doc comment belongs above
/// the wrapper rather than the construct itself.
const WRAPPER_KINDS: &[&str] = &[
    "type_definition",
    "template_declaration",
    "decorated_definition",
    "export_statement",
];

const COMMENT_KINDS: &[&str] = &["comment", "line_comment", "block_comment"];

/// Where a documentation comment goes relative to the documented node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// On the lines above the node (C-family, Rust, Go, JS/TS).
    Above,
    /// As the first statement of the node's body (Python docstrings).
    Inside,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionPoint {
    /// Row the comment is inserted before; column of the first code character.
    pub point: Point,
    /// Leading whitespace to prefix every comment line with.
    pub indent: String,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentableMeta {
    /// Whether a "Document" hint should be offered: false when the node
    /// already has a doc comment.
    pub show_hint: bool,
    pub insertion_point: InsertionPoint,
}

/// The result of a documentable-node lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentableNode {
    pub language: Language,
    pub kind: CaptureKind,
    pub range: Capture,
    /// The name capture, present only when the cursor is on it.
    pub symbol: Option<Capture>,
    /// Name of the construct regardless of cursor placement.
    pub name: Option<String>,
    pub meta: DocumentableMeta,
}

impl DocumentableNode {
    /// The captures to render for this node: symbol first (if any), then range.
    #[must_use]
    pub fn captures(&self) -> Vec<Capture> {
        self.symbol
            .iter()
            .cloned()
            .chain(std::iter::once(self.range.clone()))
            .collect()
    }
}

struct Candidate<'tree> {
    order: usize,
    range_name: &'static str,
    range: Node<'tree>,
    symbol: Option<(&'static str, Node<'tree>)>,
}

impl Candidate<'_> {
    fn len(&self) -> usize {
        self.range.end_byte() - self.range.start_byte()
    }
}

/// Find the documentable node enclosing `cursor`.
///
/// Returns `Ok(None)` when no documentable construct contains the cursor.
///
/// # Errors
/// Returns `QueryError` if the cursor lies outside the source or the query
/// fails to compile.
pub fn documentable_node(
    parsed: &ParsedSource,
    cursor: Point,
) -> Result<Option<DocumentableNode>, QueryError> {
    cursor.validate_in(parsed.source())?;

    let span = Span::new(cursor, cursor.next_column());
    let candidates = raw_matches(parsed, QueryName::DocumentableNodes, span)?
        .into_iter()
        .filter_map(|raw| {
            let mut range = None;
            let mut symbol = None;
            for (name, node) in raw.captures {
                if name.starts_with("range.") {
                    range = Some((name, node));
                } else if name.starts_with("symbol.") {
                    symbol = Some((name, node));
                }
            }
            let (range_name, range) = range?;
            Some(Candidate {
                order: raw.order,
                range_name,
                range,
                symbol,
            })
        })
        .filter(|candidate| Span::of_node(&candidate.range).contains(cursor));

    // Innermost range wins; on equal spans the later pattern wins.
    let Some(best) = candidates.min_by(|a, b| a.len().cmp(&b.len()).then(b.order.cmp(&a.order)))
    else {
        tracing::debug!(%cursor, language = %parsed.language(), "no documentable node at cursor");
        return Ok(None);
    };

    let range = Capture::from_node(parsed, best.range_name, &best.range)?;
    let kind = range.kind.unwrap_or(CaptureKind::Identifier);
    let name = best
        .symbol
        .map(|(_, node)| parsed.text_of(&node).to_string());
    let symbol = match best.symbol {
        Some((symbol_name, node)) if Span::of_node(&node).contains(cursor) => {
            Some(Capture::from_node(parsed, symbol_name, &node)?)
        }
        _ => None,
    };
    let anchor = leading_attributes(documentation_anchor(best.range));
    let meta = DocumentableMeta {
        show_hint: !is_documented(parsed, best.range, anchor),
        insertion_point: insertion_point(parsed, best.range, anchor),
    };

    tracing::debug!(
        %cursor,
        node_kind = %range.node_kind,
        symbol = symbol.as_ref().map(|s| s.text.as_str()),
        "resolved documentable node"
    );

    Ok(Some(DocumentableNode {
        language: parsed.language(),
        kind,
        range,
        symbol,
        name,
        meta,
    }))
}

/// The outermost wrapper (typedef, template, decorator, export) around `node`, or
/// `node` itself.
fn documentation_anchor(node: Node<'_>) -> Node<'_> {
    let mut anchor = node;
    while let Some(parent) = anchor.parent() {
        if !WRAPPER_KINDS.contains(&parent.kind()) {
            break;
        }
        anchor = parent;
    }
    anchor
}

/// The first of the contiguous attribute items directly above `node`
/// (Rust `#[...]`), or `node` itself.
fn leading_attributes(node: Node<'_>) -> Node<'_> {
    let mut first = node;
    while let Some(previous) = first.prev_sibling() {
        if previous.kind() != "attribute_item" {
            break;
        }
        first = previous;
    }
    first
}

/// A comment on its own line ending directly above `anchor` counts as
/// documentation. Python also accepts a docstring in the body.
fn is_documented(parsed: &ParsedSource, range: Node<'_>, anchor: Node<'_>) -> bool {
    if parsed.language() == Language::Python && has_docstring(range) {
        return true;
    }

    let Some(previous) = anchor.prev_sibling() else {
        return false;
    };
    if !COMMENT_KINDS.contains(&previous.kind()) {
        return false;
    }
    let own_line = previous
        .prev_sibling()
        .is_none_or(|before| before.end_position().row < previous.start_position().row);
    own_line && previous.end_position().row + 1 >= anchor.start_position().row
}

fn has_docstring(range: Node<'_>) -> bool {
    let Some(body) = range.child_by_field_name("body") else {
        return false;
    };
    body.named_child(0).is_some_and(|first| {
        first.kind() == "expression_statement"
            && first.named_child(0).is_some_and(|expr| expr.kind() == "string")
    })
}

fn insertion_point(parsed: &ParsedSource, range: Node<'_>, anchor: Node<'_>) -> InsertionPoint {
    let python_body = (parsed.language() == Language::Python
        && matches!(range.kind(), "function_definition" | "class_definition"))
    .then(|| range.child_by_field_name("body"))
    .flatten();

    if let Some(body) = python_body {
        let start = body.start_position();
        return InsertionPoint {
            point: Point::new(start.row, start.column),
            indent: " ".repeat(start.column),
            placement: Placement::Inside,
        };
    }

    let start = anchor.start_position();
    let line = parsed.line(start.row);
    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    InsertionPoint {
        point: Point::new(start.row, start.column),
        indent,
        placement: Placement::Above,
    }
}

#[cfg(test)]
mod tests;
