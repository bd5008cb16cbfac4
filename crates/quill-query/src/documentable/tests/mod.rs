use pretty_assertions::assert_eq;

use super::*;
use crate::parser::parse;

mod c_family;
mod python_and_go;

fn resolve(source: &str, language: Language, row: usize, column: usize) -> DocumentableNode {
    try_resolve(source, language, row, column).unwrap_or_else(|| {
        panic!("no documentable node at {row}:{column} in:\n{source}");
    })
}

fn try_resolve(
    source: &str,
    language: Language,
    row: usize,
    column: usize,
) -> Option<DocumentableNode> {
    let parsed = parse(source, language).expect("parse should succeed");
    documentable_node(&parsed, Point::new(row, column)).expect("query should run")
}

fn symbol_text(node: &DocumentableNode) -> Option<&str> {
    node.symbol.as_ref().map(|s| s.text.as_str())
}

#[test]
fn cursor_outside_source_is_an_error() {
    let parsed = parse("int a;\n", Language::C).expect("parse");
    let err = documentable_node(&parsed, Point::new(7, 0)).unwrap_err();
    assert!(matches!(
        err,
        QueryError::Core(quill_core::CoreError::InvalidPosition { row: 7, .. })
    ));
}

#[test]
fn captures_list_symbol_before_range() {
    let node = resolve("int add(int a, int b) {\n}\n", Language::C, 0, 5);
    let names: Vec<_> = node.captures().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["symbol.function", "range.function"]);
}

#[test]
fn captures_without_symbol_hold_only_the_range() {
    let node = resolve("int add(int a, int b) {\n    return a + b;\n}\n", Language::C, 1, 4);
    let names: Vec<_> = node.captures().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["range.function"]);
}

#[test]
fn serializes_to_json() {
    let node = resolve("int counter = 0;\n", Language::C, 0, 6);
    let json = serde_json::to_value(&node).expect("serialize");
    assert_eq!(json["language"], "c");
    assert_eq!(json["kind"], "identifier");
    assert_eq!(json["range"]["node_kind"], "declaration");
    assert_eq!(json["symbol"]["text"], "counter");
    assert_eq!(json["meta"]["show_hint"], true);
    assert_eq!(json["meta"]["insertion_point"]["placement"], "above");
}
