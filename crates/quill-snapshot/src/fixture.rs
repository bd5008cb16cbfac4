//! Fixture files: source snippets separated by a commented-out rule line.

use std::path::{Path, PathBuf};

use quill_core::Language;

use crate::error::SnapshotError;

const SEPARATOR_RULE: &str = "------------------------------------\n";

/// Comment conventions of one fixture language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    /// Line comment start, e.g. `//`.
    pub delimiter: &'static str,
    /// Blank prefix as wide as the delimiter.
    pub indent: String,
    /// Line separating snippets, e.g. `// ------...\n`.
    pub separator: String,
}

impl CommentStyle {
    #[must_use]
    pub fn of(language: Language) -> Self {
        let delimiter = language.comment_delimiter();
        Self {
            delimiter,
            indent: " ".repeat(delimiter.len()),
            separator: format!("{delimiter} {SEPARATOR_RULE}"),
        }
    }

    /// A `<delim> ... |` line marking the query start in the line above.
    #[must_use]
    pub fn is_cursor_line(&self, line: &str) -> bool {
        is_cursor_line(line, self.delimiter)
    }
}

pub(crate) fn is_cursor_line(line: &str, delimiter: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(delimiter) && trimmed.ends_with('|')
}

/// A loaded fixture file.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub path: PathBuf,
    pub language: Language,
    pub source: String,
}

impl Fixture {
    /// Read `path`, inferring the language from its extension unless given.
    ///
    /// # Errors
    /// Returns `SnapshotError::Io` if the file cannot be read, or
    /// `SnapshotError::UnknownLanguage` if no language applies.
    pub fn load(path: impl AsRef<Path>, language: Option<Language>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let language = match language {
            Some(language) => language,
            None => Language::from_path(path).ok_or_else(|| SnapshotError::UnknownLanguage {
                path: path.to_path_buf(),
            })?,
        };
        let source = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(path, language, source))
    }

    #[must_use]
    pub fn from_source(path: impl Into<PathBuf>, language: Language, source: String) -> Self {
        Self {
            path: path.into(),
            language,
            source,
        }
    }

    #[must_use]
    pub fn style(&self) -> CommentStyle {
        CommentStyle::of(self.language)
    }

    /// The snippets to annotate.
    ///
    /// If any snippet starts with `<delim> only`, the last such snippet is
    /// the only one returned.
    #[must_use]
    pub fn snippets(&self) -> Vec<&str> {
        let style = self.style();
        let snippets: Vec<&str> = self.source.split(style.separator.as_str()).collect();
        let focus = format!("{} only", style.delimiter);
        let focused = snippets
            .iter()
            .rev()
            .find(|snippet| snippet.starts_with(&focus));
        match focused {
            Some(snippet) => vec![*snippet],
            None => snippets,
        }
    }
}
