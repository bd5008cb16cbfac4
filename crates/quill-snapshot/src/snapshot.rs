//! Matching rendered output against `.snap` files next to the fixture.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// How [`match_snapshot`] treats the file on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotMode {
    /// Compare only; a missing snapshot is an error.
    Compare,
    /// Overwrite the snapshot with the rendered output.
    Update,
    /// Write a missing snapshot, compare an existing one.
    #[default]
    CreateMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOutcome {
    Matched,
    Created,
    Updated,
}

/// `dir/name.ext` becomes `dir/name.snap.ext`.
#[must_use]
pub fn snapshot_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{stem}.snap.{}", ext.to_string_lossy()),
        None => format!("{stem}.snap"),
    };
    source.with_file_name(name)
}

/// Compare `actual` with the snapshot at `path` according to `mode`.
///
/// # Errors
/// Returns `SnapshotError::Mismatch` with a line diff when the contents
/// differ, `SnapshotError::Missing` when comparing against a missing file,
/// or `SnapshotError::Io` on read/write failure.
pub fn match_snapshot(
    path: &Path,
    actual: &str,
    mode: SnapshotMode,
) -> Result<SnapshotOutcome, SnapshotError> {
    let existing = match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(error) if error.kind() == ErrorKind::NotFound => None,
        Err(source) => {
            return Err(SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match (mode, existing) {
        (_, Some(expected)) if expected == actual => Ok(SnapshotOutcome::Matched),
        (SnapshotMode::Update, _) => {
            write_snapshot(path, actual)?;
            tracing::info!(path = %path.display(), "updated snapshot");
            Ok(SnapshotOutcome::Updated)
        }
        (SnapshotMode::CreateMissing, None) => {
            write_snapshot(path, actual)?;
            tracing::info!(path = %path.display(), "created snapshot");
            Ok(SnapshotOutcome::Created)
        }
        (SnapshotMode::Compare, None) => Err(SnapshotError::Missing {
            path: path.to_path_buf(),
        }),
        (_, Some(expected)) => Err(SnapshotError::Mismatch {
            path: path.to_path_buf(),
            diff: line_diff(&expected, actual),
        }),
    }
}

fn write_snapshot(path: &Path, contents: &str) -> Result<(), SnapshotError> {
    let io_error = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, contents).map_err(io_error)
}

/// A single unified-style hunk covering everything between the common
/// prefix and suffix of the two texts.
fn line_diff(expected: &str, actual: &str) -> String {
    let old: Vec<&str> = expected.lines().collect();
    let new: Vec<&str> = actual.lines().collect();

    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let removed = &old[prefix..old.len() - suffix];
    let added = &new[prefix..new.len() - suffix];

    let mut diff = format!(
        "@@ -{},{} +{},{} @@\n",
        prefix + 1,
        removed.len(),
        prefix + 1,
        added.len()
    );
    for line in removed {
        diff.push('-');
        diff.push_str(line);
        diff.push('\n');
    }
    for line in added {
        diff.push('+');
        diff.push_str(line);
        diff.push('\n');
    }
    if removed.is_empty() && added.is_empty() {
        diff.push_str("\\ line endings differ\n");
    }
    diff
}
