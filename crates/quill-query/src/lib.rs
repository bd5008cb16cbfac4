//! # quill-query
//!
//! tree-sitter query binding that maps a cursor position to the enclosing
//! documentable syntax node (function, struct, enum, declaration, ...).
//!
//! Grammars come from `ast-grep-language`; queries are plain tree-sitter
//! S-expressions compiled once per language and cached for the process.
//!
//! ```no_run
//! use quill_core::{Language, Point};
//!
//! let parsed = quill_query::parse("int add(int a, int b) {\n}\n", Language::C)?;
//! if let Some(node) = quill_query::documentable_node(&parsed, Point::new(0, 5))? {
//!     println!("{} at {}", node.range.node_kind, node.range.span);
//! }
//! # Ok::<(), quill_query::QueryError>(())
//! ```

pub mod captures;
pub mod documentable;
pub mod error;
pub mod parser;
pub mod queries;
pub mod template;

pub use captures::{Capture, captures_at};
pub use documentable::{DocumentableMeta, DocumentableNode, InsertionPoint, Placement, documentable_node};
pub use error::QueryError;
pub use parser::{ParsedSource, parse};
pub use queries::{QueryName, compiled, query_source};
pub use template::{DocTemplate, apply_template, doc_comment_template};
