//! tree-sitter parsing over the ast-grep grammar registry.

use ast_grep_language::LanguageExt;
use quill_core::Language;
use tree_sitter::{Node, Parser, Tree};

use crate::error::QueryError;

/// A parsed source file: the text, its language, and the syntax tree.
#[derive(Debug)]
pub struct ParsedSource {
    language: Language,
    source: String,
    tree: Tree,
}

impl ParsedSource {
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    #[must_use]
    pub fn text_of(&self, node: &Node<'_>) -> &str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// The text of row `row`, without its line terminator.
    #[must_use]
    pub fn line(&self, row: usize) -> &str {
        self.source.split('\n').nth(row).unwrap_or_default()
    }
}

/// The tree-sitter grammar for `language`.
#[must_use]
pub fn ts_language(language: Language) -> tree_sitter::Language {
    language.support_lang().get_ts_language()
}

/// Parse `source` with the grammar for `language`.
///
/// Syntax errors do not fail the parse; tree-sitter recovers and the
/// resulting tree contains `ERROR` nodes, which is normal while typing.
///
/// # Errors
/// Returns `QueryError::Parse` if the grammar cannot be loaded or the parser
/// produces no tree.
pub fn parse(source: impl Into<String>, language: Language) -> Result<ParsedSource, QueryError> {
    let source = source.into();
    let mut parser = Parser::new();
    parser
        .set_language(&ts_language(language))
        .map_err(|error| QueryError::Parse {
            language,
            message: error.to_string(),
        })?;

    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or_else(|| QueryError::Parse {
            language,
            message: "parser returned no tree".to_string(),
        })?;

    if tree.root_node().has_error() {
        tracing::debug!(%language, "parse tree contains syntax errors");
    }

    Ok(ParsedSource {
        language,
        source,
        tree,
    })
}
