//! Render query captures as comment annotations under the snippet lines.
//!
//! ```text
//!   int add(int a, int b) {
//! //^ start range.function[1]
//! //    ^^^ symbol.function[1]
//! //    █
//!       return a + b;
//!   }
//! //^ end range.function[1]
//! ```
//!
//! Single-line captures are underlined with `^`; multi-line captures mark
//! their first and last character with `^ start` / `^ end`. `█` shows where
//! the query was issued.

use std::collections::{BTreeMap, HashMap};

use quill_core::{Language, Point};
use quill_query::{Capture, ParsedSource, QueryError, documentable_node, parse};

use crate::error::SnapshotError;
use crate::fixture::{CommentStyle, Fixture, is_cursor_line};

pub const CARET_SYMBOL: char = '█';
pub const ANNOTATION_MARKER: char = '^';
pub const DEFAULT_TAB_WIDTH: usize = 4;

const DOCUMENTATION_HEADER: [&str; 4] = [
    "",
    "| - query start position in the source file.",
    "█ – query start position in the annotated file.",
    "^ – characters matching the last query result.",
];

/// Annotation lines keyed by row, then by column.
type Annotations = BTreeMap<usize, BTreeMap<usize, Vec<String>>>;

/// The query start point: the position of `|` on the line above the first
/// `<delim> ... |` marker line.
#[must_use]
pub fn caret_point<S: AsRef<str>>(lines: &[S], delimiter: &str) -> Option<Point> {
    lines.iter().enumerate().find_map(|(row, line)| {
        let line = line.as_ref();
        if !is_cursor_line(line, delimiter) {
            return None;
        }
        let column = line.find('|')?;
        Some(Point::new(row.checked_sub(1)?, column))
    })
}

/// Captures for annotation: the documentable node's symbol (when the cursor
/// is on it) followed by its range.
///
/// Caret columns past the end of the line are clamped to the line end.
///
/// # Errors
/// Returns `QueryError` if the documentable-node query fails.
pub fn documentable_captures(parsed: &ParsedSource, cursor: Point) -> Result<Vec<Capture>, QueryError> {
    let column = cursor.column.min(parsed.line(cursor.row).len());
    let node = documentable_node(parsed, Point::new(cursor.row, column))?;
    Ok(node.map(|node| node.captures()).unwrap_or_default())
}

/// Annotates snippets of one language.
#[derive(Debug, Clone, Copy)]
pub struct Annotator {
    language: Language,
    tab_width: usize,
}

impl Annotator {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Annotate a single snippet with the captures `captures` returns for its
    /// caret point.
    ///
    /// A snippet without captures is returned unchanged.
    ///
    /// # Errors
    /// Returns `SnapshotError::NoCaret` if the snippet has no marker line, or
    /// `SnapshotError::Query` if parsing or the capture function fails.
    pub fn annotate<F>(&self, code: &str, captures: F) -> Result<String, SnapshotError>
    where
        F: Fn(&ParsedSource, Point) -> Result<Vec<Capture>, QueryError>,
    {
        let style = CommentStyle::of(self.language);
        let delimiter = style.delimiter;
        let tab = " ".repeat(self.tab_width);
        let lines: Vec<String> = code.split('\n').map(|line| line.replace('\t', &tab)).collect();

        let caret = caret_point(&lines, delimiter).ok_or_else(|| SnapshotError::NoCaret {
            snippet: lines.join("\n"),
        })?;

        // (index in the original lines, width) of the last marker line.
        let mut cursor_line = None;
        let mut kept = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            if is_cursor_line(line, delimiter) {
                cursor_line = Some((index, line.chars().count()));
            } else {
                kept.push(line.as_str());
            }
        }

        let parsed = parse(kept.join("\n"), self.language)?;
        let captured = captures(&parsed, caret)?;
        if captured.is_empty() {
            return Ok(code.to_string());
        }

        let mut annotations = Annotations::new();
        let mut name_indices: HashMap<&str, usize> = HashMap::new();
        let mut node_types = Vec::with_capacity(captured.len());

        for capture in &captured {
            let start = capture.span.start;
            let end = Point::new(
                capture.span.end.row,
                capture.span.end.column.saturating_sub(1),
            );

            let index = name_indices.entry(capture.name.as_str()).or_default();
            *index += 1;
            let id = format!("{}[{index}]", capture.name);
            node_types.push(format!("{delimiter} {id}: {}", capture.node_kind));

            annotations.entry(end.row).or_default().entry(end.column).or_default();
            let start_cell = annotations
                .entry(start.row)
                .or_default()
                .entry(start.column)
                .or_default();

            if start.row == end.row {
                annotate_single_line(start_cell, capture.text.chars().count(), &id);
            } else {
                annotate_multiline_edge(start_cell, "start", &id);
                let end_cell = annotations
                    .entry(end.row)
                    .or_default()
                    .entry(end.column)
                    .or_default();
                annotate_multiline_edge(end_cell, "end", &id);
            }
        }

        let mut result = Vec::with_capacity(kept.len() * 2);
        for (row, line) in kept.iter().enumerate() {
            if let Some((_, width)) = cursor_line.filter(|(index, _)| *index == row) {
                result.push(format!(
                    "{delimiter}{}{CARET_SYMBOL}",
                    " ".repeat(width.saturating_sub(1))
                ));
            }

            if line.is_empty() || line.starts_with(delimiter) {
                result.push((*line).to_string());
            } else {
                result.push(format!("{}{line}", style.indent));
            }

            for (column, cell) in annotations.get(&row).into_iter().flatten() {
                for annotation in cell {
                    result.push(format!("{delimiter}{}{annotation}", " ".repeat(*column)));
                }
            }
        }

        let mut annotated = result
            .into_iter()
            .filter(|line| !is_cursor_line(line, delimiter))
            .collect::<Vec<_>>()
            .join("\n");
        if !annotated.ends_with("\n\n") {
            annotated.push('\n');
        }
        annotated.push_str(&format!(
            "{delimiter} Nodes types:\n{}\n\n",
            node_types.join("\n")
        ));
        Ok(annotated)
    }

    /// Annotate every snippet of `fixture` and join them under the legend
    /// header.
    ///
    /// # Errors
    /// Returns the first snippet's `SnapshotError`.
    pub fn render<F>(&self, fixture: &Fixture, captures: F) -> Result<String, SnapshotError>
    where
        F: Fn(&ParsedSource, Point) -> Result<Vec<Capture>, QueryError>,
    {
        let style = CommentStyle::of(self.language);
        let header = DOCUMENTATION_HEADER
            .iter()
            .map(|line| format!("{} {line}", style.delimiter))
            .chain(std::iter::once(style.delimiter.to_string()))
            .collect::<Vec<_>>()
            .join("\n");

        let annotated = fixture
            .snippets()
            .into_iter()
            .map(|snippet| self.annotate(snippet, &captures))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            path = %fixture.path.display(),
            snippets = annotated.len(),
            "rendered fixture"
        );
        Ok(format!(
            "{header}\n{separator}\n{}",
            annotated.join(&style.separator),
            separator = style.separator
        ))
    }
}

/// Annotate a snippet with [`Annotator::new`] defaults.
///
/// # Errors
/// See [`Annotator::annotate`].
pub fn annotate_snippet<F>(code: &str, language: Language, captures: F) -> Result<String, SnapshotError>
where
    F: Fn(&ParsedSource, Point) -> Result<Vec<Capture>, QueryError>,
{
    Annotator::new(language).annotate(code, captures)
}

/// Render a whole fixture with [`Annotator::new`] defaults, in the fixture's
/// language.
///
/// # Errors
/// See [`Annotator::render`].
pub fn render_fixture<F>(fixture: &Fixture, captures: F) -> Result<String, SnapshotError>
where
    F: Fn(&ParsedSource, Point) -> Result<Vec<Capture>, QueryError>,
{
    Annotator::new(fixture.language).render(fixture, captures)
}

/// Add a `^^^ id` underline. When the cell already holds an underline of the
/// same width, `id` is appended to the cell's first entry instead.
fn annotate_single_line(cell: &mut Vec<String>, width: usize, id: &str) {
    let same_width = cell.iter().any(|annotation| {
        width
            .checked_sub(1)
            .is_some_and(|last| annotation.rfind(ANNOTATION_MARKER) == Some(last))
    });
    match (same_width, cell.first_mut()) {
        (true, Some(first)) => {
            first.push_str(", ");
            first.push_str(id);
        }
        _ => cell.push(format!("{} {id}", ANNOTATION_MARKER.to_string().repeat(width))),
    }
}

/// Mark one edge of a multi-line capture. When the cell already holds a
/// single-character annotation, the edge is appended to the cell's first
/// entry.
fn annotate_multiline_edge(cell: &mut Vec<String>, side: &str, id: &str) {
    let single_char = cell
        .iter()
        .find(|annotation| annotation.rfind(ANNOTATION_MARKER) == Some(0))
        .map(|annotation| annotation.contains(&format!(" {side} ")));
    match (single_char, cell.first_mut()) {
        (Some(true), Some(first)) => {
            first.push_str(", ");
            first.push_str(id);
        }
        (Some(false), Some(first)) => {
            first.push_str(", ");
            first.push_str(side);
            first.push(' ');
            first.push_str(id);
        }
        _ => cell.push(format!("{ANNOTATION_MARKER} {side} {id}")),
    }
}
