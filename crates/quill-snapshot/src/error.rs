//! Snapshot harness error types.

use std::path::PathBuf;

use quill_query::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snippet has no `<delim> ... |` marker line.
    #[error("No caret point found in snippet:\n{snippet}")]
    NoCaret { snippet: String },

    #[error("Cannot infer fixture language from {}", path.display())]
    UnknownLanguage { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendered output differs from the stored snapshot.
    #[error("Snapshot mismatch in {}:\n{diff}", path.display())]
    Mismatch { path: PathBuf, diff: String },

    #[error("Snapshot {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error(transparent)]
    Query(#[from] QueryError),
}
