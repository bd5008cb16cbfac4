//! Capture-name classification for documentable-node queries.
//!
//! Query captures are named `<role>.<kind>`, e.g. `range.function` or
//! `symbol.identifier`. The bare `comment` capture marks existing comments.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// What a capture contributes to a documentable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureRole {
    /// The whole construct a doc comment is attached to.
    Range,
    /// The name of the construct.
    Symbol,
    Comment,
}

/// The flavour of documentable construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureKind {
    Function,
    Identifier,
}

impl CaptureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Identifier => "identifier",
        }
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a capture name into its role and kind.
///
/// # Errors
/// Returns `CoreError::Validation` for names outside the documentable-node
/// vocabulary.
pub fn classify(name: &str) -> Result<(CaptureRole, Option<CaptureKind>), CoreError> {
    if name == "comment" {
        return Ok((CaptureRole::Comment, None));
    }

    let (role, kind) = name
        .split_once('.')
        .ok_or_else(|| CoreError::Validation(format!("capture name '{name}' has no kind")))?;

    let role = match role {
        "range" => CaptureRole::Range,
        "symbol" => CaptureRole::Symbol,
        other => {
            return Err(CoreError::Validation(format!("unknown capture role '{other}'")));
        }
    };
    let kind = match kind {
        "function" => CaptureKind::Function,
        "identifier" => CaptureKind::Identifier,
        other => {
            return Err(CoreError::Validation(format!("unknown capture kind '{other}'")));
        }
    };
    Ok((role, Some(kind)))
}
