//! Running a named query around a cursor and collecting its captures.

use quill_core::capture::classify;
use quill_core::{CaptureKind, CaptureRole, Point, Span};
use serde::{Deserialize, Serialize};
use tree_sitter::{Node, QueryCursor, StreamingIterator};

use crate::error::QueryError;
use crate::parser::ParsedSource;
use crate::queries::{QueryName, compiled};

/// A named node produced by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Capture name as written in the query, e.g. `range.function`.
    pub name: String,
    pub role: CaptureRole,
    pub kind: Option<CaptureKind>,
    /// Grammar node kind, e.g. `function_definition`.
    pub node_kind: String,
    pub span: Span,
    pub text: String,
}

impl Capture {
    pub(crate) fn from_node(
        parsed: &ParsedSource,
        name: &str,
        node: &Node<'_>,
    ) -> Result<Self, QueryError> {
        let (role, kind) = classify(name)?;
        Ok(Self {
            name: name.to_string(),
            role,
            kind,
            node_kind: node.kind().to_string(),
            span: Span::of_node(node),
            text: parsed.text_of(node).to_string(),
        })
    }
}

/// One query match: its captures in pattern order, with live nodes.
pub(crate) struct RawMatch<'tree> {
    pub order: usize,
    pub captures: Vec<(&'static str, Node<'tree>)>,
}

/// Top-level nodes whose span intersects `span`.
///
/// Query execution is scoped to these subtrees so cost stays proportional
/// to the construct under the cursor rather than the whole file.
pub(crate) fn scope_nodes<'tree>(parsed: &'tree ParsedSource, span: Span) -> Vec<Node<'tree>> {
    let root = parsed.root();
    let mut walker = root.walk();
    root.children(&mut walker)
        .filter(|child| {
            let child_span = Span::of_node(child);
            child_span.start <= span.end && span.start <= child_span.end
        })
        .collect()
}

/// All matches of `name` inside the top-level nodes intersecting `span`.
pub(crate) fn raw_matches<'tree>(
    parsed: &'tree ParsedSource,
    name: QueryName,
    span: Span,
) -> Result<Vec<RawMatch<'tree>>, QueryError> {
    let query = compiled(parsed.language(), name)?;
    let capture_names = query.capture_names();
    let source = parsed.source().as_bytes();

    let mut cursor = QueryCursor::new();
    let mut found = Vec::new();
    for scope in scope_nodes(parsed, span) {
        let mut matches = cursor.matches(query, scope, source);
        while let Some(m) = matches.next() {
            let captures = m
                .captures
                .iter()
                .map(|capture| (capture_names[capture.index as usize], capture.node))
                .collect();
            found.push(RawMatch {
                order: found.len(),
                captures,
            });
        }
    }
    Ok(found)
}

/// Captures of `name` around `cursor`, ordered by start position.
///
/// Includes every capture of every match found in the top-level node under
/// the cursor; callers filter by role and containment.
///
/// # Errors
/// Returns `QueryError` if the query fails to compile or a capture name is
/// outside the documentable-node vocabulary.
pub fn captures_at(
    parsed: &ParsedSource,
    name: QueryName,
    cursor: Point,
) -> Result<Vec<Capture>, QueryError> {
    let span = Span::new(cursor, cursor.next_column());
    let mut ordered = Vec::new();
    for raw in raw_matches(parsed, name, span)? {
        for (capture_name, node) in &raw.captures {
            ordered.push((raw.order, Capture::from_node(parsed, capture_name, node)?));
        }
    }
    ordered.sort_by(|(a_order, a), (b_order, b)| {
        a.span.start.cmp(&b.span.start).then(a_order.cmp(b_order))
    });
    Ok(ordered.into_iter().map(|(_, capture)| capture).collect())
}
