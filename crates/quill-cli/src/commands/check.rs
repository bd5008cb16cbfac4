use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use quill_config::QuillConfig;
use quill_core::Language;
use quill_snapshot::{
    Annotator, Fixture, SnapshotError, SnapshotMode, SnapshotOutcome, check_fixture_with,
    documentable_captures, snapshot_path,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output::{TextOutput, output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Matched,
    Created,
    Updated,
    Skipped,
    Failed,
}

impl From<SnapshotOutcome> for CheckStatus {
    fn from(outcome: SnapshotOutcome) -> Self {
        match outcome {
            SnapshotOutcome::Matched => Self::Matched,
            SnapshotOutcome::Created => Self::Created,
            SnapshotOutcome::Updated => Self::Updated,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub fixture: String,
    pub snapshot: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub mode: SnapshotMode,
    pub results: Vec<CheckEntry>,
    pub failed: usize,
}

impl TextOutput for CheckResponse {
    fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.results.len() + 1);
        for entry in &self.results {
            let status = match entry.status {
                CheckStatus::Matched => "ok",
                CheckStatus::Created => "created",
                CheckStatus::Updated => "updated",
                CheckStatus::Skipped => "skipped",
                CheckStatus::Failed => "FAILED",
            };
            lines.push(format!("{status:>8} {}", entry.fixture));
            if let Some(detail) = &entry.detail {
                lines.extend(detail.lines().map(|line| format!("         {line}")));
            }
        }
        lines.push(format!(
            "{} fixture(s), {} failed",
            self.results.len(),
            self.failed
        ));
        lines.join("\n")
    }
}

/// CLI flags override config: `--update` forces rewrites, `--no-create`
/// disables writing missing snapshots.
pub fn snapshot_mode(args: &CheckArgs, config: &QuillConfig) -> SnapshotMode {
    if args.update || config.snapshot.update {
        SnapshotMode::Update
    } else if args.no_create || !config.snapshot.create_missing {
        SnapshotMode::Compare
    } else {
        SnapshotMode::CreateMissing
    }
}

/// Fixture files directly inside `dir`: files of a supported language that
/// are not themselves snapshots. Sorted by path.
pub fn discover_fixtures(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read fixtures directory '{}'", dir.display()))?;
    let mut fixtures = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_snapshot = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(".snap"));
        if path.is_file() && !is_snapshot && Language::from_path(&path).is_some() {
            fixtures.push(path);
        }
    }
    fixtures.sort();
    Ok(fixtures)
}

fn check_one(
    path: &Path,
    config: &QuillConfig,
    enabled: &[Language],
    mode: SnapshotMode,
) -> CheckEntry {
    let snapshot = snapshot_path(path).display().to_string();
    let entry = |status, detail| CheckEntry {
        fixture: path.display().to_string(),
        snapshot: snapshot.clone(),
        status,
        detail,
    };

    let fixture = match Fixture::load(path, None) {
        Ok(fixture) => fixture,
        Err(error) => return entry(CheckStatus::Failed, Some(error.to_string())),
    };
    if !enabled.contains(&fixture.language) {
        tracing::debug!(path = %path.display(), language = %fixture.language, "language disabled");
        return entry(CheckStatus::Skipped, None);
    }

    let annotator = Annotator::new(fixture.language).with_tab_width(config.query.tab_width);
    match check_fixture_with(&fixture, &annotator, documentable_captures, mode) {
        Ok(outcome) => entry(outcome.into(), None),
        Err(SnapshotError::Mismatch { diff, .. }) => entry(CheckStatus::Failed, Some(diff)),
        Err(error) => entry(CheckStatus::Failed, Some(error.to_string())),
    }
}

/// Handle `quill check`.
pub fn handle(args: &CheckArgs, config: &QuillConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fixtures = if args.fixtures.is_empty() {
        discover_fixtures(Path::new(&config.snapshot.fixtures_dir))?
    } else {
        args.fixtures.clone()
    };
    let enabled = config.query.enabled_languages()?;
    let mode = snapshot_mode(args, config);

    let results: Vec<CheckEntry> = fixtures
        .iter()
        .map(|path| check_one(path, config, &enabled, mode))
        .collect();
    let failed = results
        .iter()
        .filter(|entry| entry.status == CheckStatus::Failed)
        .count();

    if !(flags.quiet && failed == 0) {
        output(
            &CheckResponse {
                mode,
                results,
                failed,
            },
            flags.format,
        )?;
    }

    if failed > 0 {
        bail!("{failed} snapshot check(s) failed");
    }
    Ok(())
}
