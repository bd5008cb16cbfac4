//! # quill-snapshot
//!
//! Snapshot harness for documentable-node queries. A fixture file holds
//! snippets separated by `<delim> ------------------------------------`;
//! each snippet marks a query position with a `<delim>  |` line under the
//! code. Rendering annotates the captures found at each position, and the
//! result is matched against `<name>.snap.<ext>` beside the fixture.
//!
//! ```no_run
//! use quill_snapshot::{Fixture, SnapshotMode, check_fixture};
//!
//! let fixture = Fixture::load("test-data/documentable-node.c", None)?;
//! check_fixture(&fixture, SnapshotMode::CreateMissing)?;
//! # Ok::<(), quill_snapshot::SnapshotError>(())
//! ```

pub mod annotate;
pub mod error;
pub mod fixture;
pub mod snapshot;

use quill_core::Point;
use quill_query::{Capture, ParsedSource, QueryError};

pub use annotate::{Annotator, annotate_snippet, caret_point, documentable_captures, render_fixture};
pub use error::SnapshotError;
pub use fixture::{CommentStyle, Fixture};
pub use snapshot::{SnapshotMode, SnapshotOutcome, match_snapshot, snapshot_path};

/// Render `fixture` with `annotator` and `captures`, then match the result
/// against its snapshot file.
///
/// # Errors
/// Propagates rendering and snapshot errors.
pub fn check_fixture_with<F>(
    fixture: &Fixture,
    annotator: &Annotator,
    captures: F,
    mode: SnapshotMode,
) -> Result<SnapshotOutcome, SnapshotError>
where
    F: Fn(&ParsedSource, Point) -> Result<Vec<Capture>, QueryError>,
{
    let rendered = annotator.render(fixture, captures)?;
    match_snapshot(&snapshot_path(&fixture.path), &rendered, mode)
}

/// [`check_fixture_with`] using documentable-node captures and default
/// annotation settings.
///
/// # Errors
/// Propagates rendering and snapshot errors.
pub fn check_fixture(fixture: &Fixture, mode: SnapshotMode) -> Result<SnapshotOutcome, SnapshotError> {
    check_fixture_with(
        fixture,
        &Annotator::new(fixture.language),
        documentable_captures,
        mode,
    )
}
