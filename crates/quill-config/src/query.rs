//! Query and annotation settings.

use quill_core::Language;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_tab_width() -> usize {
    4
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Spaces a tab expands to in annotated snippets.
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Languages to process (`"rust"`, `"cpp"`, ...). Empty means all.
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            tab_width: default_tab_width(),
            languages: Vec::new(),
        }
    }
}

impl QueryConfig {
    /// The configured languages, parsed.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an unrecognized language name.
    pub fn enabled_languages(&self) -> Result<Vec<Language>, ConfigError> {
        if self.languages.is_empty() {
            return Ok(Language::ALL.to_vec());
        }
        self.languages
            .iter()
            .map(|name| {
                name.parse::<Language>().map_err(|error| ConfigError::InvalidValue {
                    field: "query.languages".to_string(),
                    reason: error.to_string(),
                })
            })
            .collect()
    }

    /// # Errors
    /// Returns `ConfigError::InvalidValue` for a zero tab width or an
    /// unrecognized language.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "query.tab_width".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        self.enabled_languages().map(|_| ())
    }
}
