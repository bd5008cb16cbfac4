//! Query error types for quill-query.

use quill_core::{CoreError, Language};

/// Errors that can occur while parsing source or running a query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Parse failed for {language}: {message}")]
    Parse { language: Language, message: String },

    #[error("Query failed to compile for {language}: {message}")]
    Compile { language: Language, message: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
