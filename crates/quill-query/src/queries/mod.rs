//! Query sources per language and the process-wide compiled query cache.
//!
//! Capture names follow `<role>.<kind>` (see `quill_core::capture`):
//! `range.*` marks the node a doc comment attaches to, `symbol.*` its name.

mod c;
mod go;
mod javascript;
mod python;
mod rust;

use std::sync::OnceLock;

use quill_core::Language;
use serde::{Deserialize, Serialize};
use tree_sitter::Query;

use crate::error::QueryError;
use crate::parser::ts_language;

/// Named queries available per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryName {
    DocumentableNodes,
}

impl QueryName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DocumentableNodes => "documentable_nodes",
        }
    }
}

/// S-expression source of `name` for `language`.
#[must_use]
pub const fn query_source(language: Language, name: QueryName) -> &'static str {
    match name {
        QueryName::DocumentableNodes => match language {
            Language::C => c::C_DOCUMENTABLE_NODES,
            Language::Cpp => c::CPP_DOCUMENTABLE_NODES,
            Language::Rust => rust::RUST_DOCUMENTABLE_NODES,
            Language::Go => go::GO_DOCUMENTABLE_NODES,
            Language::Python => python::PYTHON_DOCUMENTABLE_NODES,
            Language::JavaScript => javascript::JS_DOCUMENTABLE_NODES,
            Language::TypeScript | Language::Tsx => javascript::TS_DOCUMENTABLE_NODES,
        },
    }
}

const LANGUAGE_COUNT: usize = Language::ALL.len();

type Slot = OnceLock<Result<Query, String>>;

static DOCUMENTABLE_NODES: [Slot; LANGUAGE_COUNT] = [const { OnceLock::new() }; LANGUAGE_COUNT];

const fn slot_index(language: Language) -> usize {
    match language {
        Language::C => 0,
        Language::Cpp => 1,
        Language::Rust => 2,
        Language::Go => 3,
        Language::Python => 4,
        Language::JavaScript => 5,
        Language::TypeScript => 6,
        Language::Tsx => 7,
    }
}

/// The compiled query, built on first use and shared for the process lifetime.
///
/// A compile failure is cached too, so a broken query reports the same error
/// on every call without recompiling.
///
/// # Errors
/// Returns `QueryError::Compile` if the query source is rejected by the grammar.
pub fn compiled(language: Language, name: QueryName) -> Result<&'static Query, QueryError> {
    let slots = match name {
        QueryName::DocumentableNodes => &DOCUMENTABLE_NODES,
    };

    slots[slot_index(language)]
        .get_or_init(|| {
            tracing::debug!(%language, query = name.as_str(), "compiling query");
            Query::new(&ts_language(language), query_source(language, name))
                .map_err(|error| error.to_string())
        })
        .as_ref()
        .map_err(|message| QueryError::Compile {
            language,
            message: message.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Language::C)]
    #[case(Language::Cpp)]
    #[case(Language::Rust)]
    #[case(Language::Go)]
    #[case(Language::Python)]
    #[case(Language::JavaScript)]
    #[case(Language::TypeScript)]
    #[case(Language::Tsx)]
    fn documentable_query_compiles(#[case] language: Language) {
        let query = compiled(language, QueryName::DocumentableNodes)
            .unwrap_or_else(|error| panic!("{language}: {error}"));
        assert!(query.pattern_count() > 0);
    }

    #[test]
    fn capture_names_stay_in_vocabulary() {
        for language in Language::ALL {
            let query = compiled(language, QueryName::DocumentableNodes).expect("query compiles");
            for name in query.capture_names() {
                assert!(
                    quill_core::capture::classify(name).is_ok(),
                    "{language}: unexpected capture name {name}"
                );
            }
        }
    }

    #[test]
    fn every_language_has_range_and_symbol_captures() {
        for language in Language::ALL {
            let query = compiled(language, QueryName::DocumentableNodes).expect("query compiles");
            let names = query.capture_names();
            assert!(names.iter().any(|n| n.starts_with("range.")), "{language}");
            assert!(names.iter().any(|n| n.starts_with("symbol.")), "{language}");
            assert!(names.contains(&"comment"), "{language}");
        }
    }

    #[test]
    fn typescript_extends_javascript() {
        let js = query_source(Language::JavaScript, QueryName::DocumentableNodes);
        let ts = query_source(Language::TypeScript, QueryName::DocumentableNodes);
        assert!(ts.starts_with(js));
        assert!(ts.contains("interface_declaration"));
    }

    #[test]
    fn cpp_shares_c_type_patterns() {
        let cpp = query_source(Language::Cpp, QueryName::DocumentableNodes);
        assert!(cpp.contains("(enum_specifier"));
        assert!(cpp.contains("(class_specifier"));
        assert!(!query_source(Language::C, QueryName::DocumentableNodes).contains("class_specifier"));
    }

    #[test]
    fn compiled_queries_are_cached() {
        let first = compiled(Language::C, QueryName::DocumentableNodes).expect("query compiles");
        let second = compiled(Language::C, QueryName::DocumentableNodes).expect("query compiles");
        assert!(std::ptr::eq(first, second));
    }
}
