//! Cross-cutting error types for quill.
//!
//! Query and snapshot failures have their own error enums in `quill-query`
//! and `quill-snapshot`. Everything converges into `anyhow` in `quill-cli`.

use thiserror::Error;

/// Errors that can be raised by any quill crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No grammar or query set is registered for the language.
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    /// A cursor position lies outside the source text.
    #[error("Invalid position {row}:{column}: {reason}")]
    InvalidPosition {
        row: usize,
        column: usize,
        reason: String,
    },

    /// Data failed validation (capture names, user input).
    #[error("Validation error: {0}")]
    Validation(String),
}
