//! Snapshot harness settings.

use serde::{Deserialize, Serialize};

const fn default_create_missing() -> bool {
    true
}

fn default_fixtures_dir() -> String {
    "test-data".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SnapshotConfig {
    /// Rewrite snapshots instead of comparing them.
    #[serde(default)]
    pub update: bool,

    /// Write snapshots that do not exist yet.
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,

    /// Directory searched for fixtures when none are given.
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            update: false,
            create_missing: default_create_missing(),
            fixtures_dir: default_fixtures_dir(),
        }
    }
}
