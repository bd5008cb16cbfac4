//! Renders the fixtures under `test-data/` and matches their committed
//! snapshots.

use std::path::PathBuf;

use quill_snapshot::{Fixture, SnapshotMode, SnapshotOutcome, check_fixture, documentable_captures, render_fixture};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data").join(name)
}

fn rendered(name: &str) -> String {
    let fixture = Fixture::load(fixture_path(name), None).expect("fixture loads");
    render_fixture(&fixture, documentable_captures).expect("fixture renders")
}

#[rstest]
#[case("documentable-node.c")]
#[case("documentable-node.cpp")]
#[case("documentable-node.rs")]
#[case("documentable-node.go")]
#[case("documentable-node.py")]
#[case("documentable-node.ts")]
fn fixture_matches_snapshot(#[case] name: &str) {
    let fixture = Fixture::load(fixture_path(name), None).expect("fixture loads");
    let outcome = check_fixture(&fixture, SnapshotMode::Compare)
        .unwrap_or_else(|error| panic!("{name}: {error}"));
    assert_eq!(outcome, SnapshotOutcome::Matched);
}

#[test]
fn c_fixture_annotations() {
    let out = rendered("documentable-node.c");
    assert!(out.starts_with("// \n// | - query start position in the source file.\n"));
    assert!(out.contains("// symbol.function[1]: identifier\n// range.function[1]: function_definition\n"));
    assert!(out.contains("// symbol.identifier[1]: field_identifier\n// range.identifier[1]: field_declaration\n"));
    assert!(out.contains("// range.identifier[1]: preproc_def\n"));
    assert!(out.contains("// range.function[1]: declaration\n"));
    // No documentable node on a blank line: the snippet is kept verbatim.
    assert!(out.contains("int first;\n\n//|\nint second;\n"));
}

#[test]
fn c_function_snippet_is_fully_annotated() {
    let out = rendered("documentable-node.c");
    assert!(out.contains(
        "  int add(int a, int b) {\n\
         //^ start range.function[1]\n\
         //    ^^^ symbol.function[1]\n\
         //    █\n"
    ));
}

#[test]
fn rust_field_cursor_resolves_to_struct() {
    let out = rendered("documentable-node.rs");
    assert!(out.contains(
        "  struct Animal {\n\
         //^ start range.identifier[1]\n\
         \x20     name: String,\n"
    ));
    assert!(!out.contains("field_declaration"));
}

#[test]
fn rust_alias_and_const_are_left_verbatim() {
    let out = rendered("documentable-node.rs");
    assert!(out.contains("// ------------------------------------\ntype Key = i32;\n//      |\n"));
    assert!(out.contains("// ------------------------------------\nconst NAME: &str = \"Tom\";\n//      |\n"));
}

#[test]
fn python_fixture_uses_hash_comments() {
    let out = rendered("documentable-node.py");
    assert!(out.starts_with("# \n# | - query start position in the source file.\n"));
    assert!(out.contains("# ------------------------------------\n"));
    assert!(out.contains("# symbol.identifier[1]: identifier\n# range.identifier[1]: class_definition\n"));
    assert!(out.contains("# range.identifier[1]: expression_statement\n"));
}

#[test]
fn go_fixture_expands_tabs() {
    let out = rendered("documentable-node.go");
    assert!(!out.contains('\t'));
    assert!(out.contains("// range.function[1]: function_declaration\n"));
    assert!(out.contains("// range.identifier[1]: field_declaration\n"));
}

#[test]
fn typescript_fixture_annotations() {
    let out = rendered("documentable-node.ts");
    assert!(out.contains("// range.function[1]: function_declaration\n"));
    assert!(out.contains("// range.identifier[1]: interface_declaration\n"));
    assert!(out.contains("// range.function[1]: method_definition\n"));
}
