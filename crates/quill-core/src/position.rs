//! Source positions and spans.
//!
//! All positions are 0-based. Columns count bytes, as tree-sitter does.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// A 0-based `(row, column)` position in source text.
///
/// Ordering is row-major, which matches tree-sitter's point comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Build a point from 1-based line/column numbers (editor and CLI convention).
    ///
    /// # Errors
    /// Returns `CoreError::InvalidPosition` if either component is zero.
    pub fn from_one_based(line: usize, column: usize) -> Result<Self, CoreError> {
        if line == 0 || column == 0 {
            return Err(CoreError::InvalidPosition {
                row: line,
                column,
                reason: "line and column are 1-based".to_string(),
            });
        }
        Ok(Self::new(line - 1, column - 1))
    }

    /// `(line, column)` in the 1-based editor convention.
    #[must_use]
    pub const fn to_one_based(self) -> (usize, usize) {
        (self.row + 1, self.column + 1)
    }

    /// The same row, one column to the right.
    #[must_use]
    pub const fn next_column(self) -> Self {
        Self::new(self.row, self.column + 1)
    }

    /// Check that the point addresses a row that exists in `source`.
    ///
    /// The column may sit one past the end of the line (cursor at end of line).
    ///
    /// # Errors
    /// Returns `CoreError::InvalidPosition` when the row or column is out of range.
    pub fn validate_in(self, source: &str) -> Result<(), CoreError> {
        let Some(line) = source.split('\n').nth(self.row) else {
            return Err(CoreError::InvalidPosition {
                row: self.row,
                column: self.column,
                reason: "row is past the end of the source".to_string(),
            });
        };
        if self.column > line.len() {
            return Err(CoreError::InvalidPosition {
                row: self.row,
                column: self.column,
                reason: format!("line has only {} columns", line.len()),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl From<tree_sitter::Point> for Point {
    fn from(p: tree_sitter::Point) -> Self {
        Self::new(p.row, p.column)
    }
}

impl From<Point> for tree_sitter::Point {
    fn from(p: Point) -> Self {
        Self {
            row: p.row,
            column: p.column,
        }
    }
}

/// A `[start, end]` region of source text as reported by tree-sitter.
///
/// `end` is exclusive in tree-sitter terms (one past the last byte), but
/// [`Span::contains`] treats it inclusively so that a cursor resting right
/// after a name still counts as being on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Point,
    pub end: Point,
}

impl Span {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn of_node(node: &tree_sitter::Node<'_>) -> Self {
        Self::new(node.start_position().into(), node.end_position().into())
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.start <= point && point <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
