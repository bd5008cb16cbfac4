use pretty_assertions::assert_eq;

use super::*;

const ADD: &str = "int add(int a, int b) {\n    return a + b;\n}\n";

#[test]
fn c_function_name_yields_symbol_and_range() {
    let node = resolve(ADD, Language::C, 0, 5);
    assert_eq!(node.kind, CaptureKind::Function);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(node.range.name, "range.function");
    assert_eq!(symbol_text(&node), Some("add"));
    assert_eq!(node.symbol.as_ref().map(|s| s.node_kind.as_str()), Some("identifier"));
}

#[test]
fn c_function_body_yields_range_without_symbol() {
    let node = resolve(ADD, Language::C, 1, 4);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(node.symbol, None);
    assert_eq!(node.name.as_deref(), Some("add"));
    assert_eq!(node.range.span, Span::new(Point::new(0, 0), Point::new(2, 1)));
}

#[test]
fn c_cursor_right_after_name_still_counts() {
    // "add" spans columns 4..7; column 7 is the opening parenthesis.
    let node = resolve(ADD, Language::C, 0, 7);
    assert_eq!(symbol_text(&node), Some("add"));
}

#[test]
fn c_cursor_on_return_type_has_no_symbol() {
    let node = resolve(ADD, Language::C, 0, 1);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(node.symbol, None);
}

#[test]
fn c_pointer_returning_function() {
    let node = resolve("char *name(void) {\n    return 0;\n}\n", Language::C, 0, 7);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(symbol_text(&node), Some("name"));
}

#[test]
fn c_prototype_is_a_function() {
    let node = resolve("void reset(void);\n", Language::C, 0, 7);
    assert_eq!(node.kind, CaptureKind::Function);
    assert_eq!(node.range.node_kind, "declaration");
    assert_eq!(symbol_text(&node), Some("reset"));
}

#[test]
fn c_struct_name() {
    let node = resolve("struct Point {\n    int x;\n    int y;\n};\n", Language::C, 0, 9);
    assert_eq!(node.kind, CaptureKind::Identifier);
    assert_eq!(node.range.node_kind, "struct_specifier");
    assert_eq!(symbol_text(&node), Some("Point"));
}

#[test]
fn c_struct_field_is_innermost() {
    let node = resolve("struct Point {\n    int x;\n    int y;\n};\n", Language::C, 1, 8);
    assert_eq!(node.range.node_kind, "field_declaration");
    assert_eq!(node.range.text, "int x;");
    assert_eq!(symbol_text(&node), Some("x"));
    assert_eq!(node.meta.insertion_point.indent, "    ");
}

#[test]
fn c_enumerator() {
    let node = resolve("enum Color {\n    RED,\n    GREEN\n};\n", Language::C, 1, 5);
    assert_eq!(node.range.node_kind, "enumerator");
    assert_eq!(symbol_text(&node), Some("RED"));
}

#[test]
fn c_enum_name() {
    let node = resolve("enum Color {\n    RED,\n    GREEN\n};\n", Language::C, 0, 7);
    assert_eq!(node.range.node_kind, "enum_specifier");
    assert_eq!(symbol_text(&node), Some("Color"));
}

#[test]
fn c_global_declaration() {
    let node = resolve("int counter = 0;\n", Language::C, 0, 6);
    assert_eq!(node.range.node_kind, "declaration");
    assert_eq!(symbol_text(&node), Some("counter"));
}

#[test]
fn c_local_declaration_inside_function() {
    let node = resolve("void f(void) {\n    int y = 4;\n}\n", Language::C, 1, 8);
    assert_eq!(node.range.node_kind, "declaration");
    assert_eq!(node.range.span.start, Point::new(1, 4));
    assert_eq!(symbol_text(&node), Some("y"));
}

#[test]
fn c_typedef() {
    let node = resolve("typedef unsigned long Counter;\n", Language::C, 0, 24);
    assert_eq!(node.range.node_kind, "type_definition");
    assert_eq!(symbol_text(&node), Some("Counter"));
}

#[test]
fn c_object_like_macro() {
    let node = resolve("#define MAX_SIZE 128\n", Language::C, 0, 10);
    assert_eq!(node.range.node_kind, "preproc_def");
    assert_eq!(symbol_text(&node), Some("MAX_SIZE"));
}

#[test]
fn c_blank_line_has_no_documentable_node() {
    assert!(try_resolve("int a;\n\nint b;\n", Language::C, 1, 0).is_none());
}

#[test]
fn c_comment_above_hides_hint() {
    let source = "/* Adds numbers. */\nint add(int a, int b) {\n    return a + b;\n}\n";
    let node = resolve(source, Language::C, 2, 4);
    assert!(!node.meta.show_hint);
}

#[test]
fn c_undocumented_function_shows_hint() {
    assert!(resolve(ADD, Language::C, 1, 4).meta.show_hint);
}

#[test]
fn c_comment_separated_by_blank_line_does_not_document() {
    let source = "// Unrelated.\n\nint add(int a, int b) {\n}\n";
    assert!(resolve(source, Language::C, 2, 5).meta.show_hint);
}

#[test]
fn c_trailing_comment_on_previous_code_does_not_document() {
    let node = resolve("int a; // counter\nint b;\n", Language::C, 1, 4);
    assert_eq!(symbol_text(&node), Some("b"));
    assert!(node.meta.show_hint);
}

#[test]
fn cpp_class_name() {
    let source = "class Widget {\npublic:\n    void draw();\n};\n";
    let node = resolve(source, Language::Cpp, 0, 8);
    assert_eq!(node.range.node_kind, "class_specifier");
    assert_eq!(symbol_text(&node), Some("Widget"));
}

#[test]
fn cpp_method_declaration_in_class() {
    let source = "class Widget {\npublic:\n    void draw();\n};\n";
    let node = resolve(source, Language::Cpp, 2, 10);
    assert_eq!(node.kind, CaptureKind::Function);
    assert_eq!(symbol_text(&node), Some("draw"));
    assert_eq!(node.range.span.start, Point::new(2, 4));
}

#[test]
fn cpp_qualified_method_definition() {
    let source = "void Widget::draw() {\n    paint();\n}\n";
    let node = resolve(source, Language::Cpp, 0, 14);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(symbol_text(&node), Some("Widget::draw"));
    assert_eq!(
        node.symbol.as_ref().map(|s| s.node_kind.as_str()),
        Some("qualified_identifier")
    );
}

#[test]
fn cpp_namespace_and_member() {
    let source = "namespace gfx {\nint scale = 2;\n}\n";
    let namespace = resolve(source, Language::Cpp, 0, 11);
    assert_eq!(namespace.range.node_kind, "namespace_definition");
    assert_eq!(symbol_text(&namespace), Some("gfx"));

    let member = resolve(source, Language::Cpp, 1, 5);
    assert_eq!(member.range.node_kind, "declaration");
    assert_eq!(symbol_text(&member), Some("scale"));
}

#[test]
fn cpp_template_inserts_above_template_header() {
    let source = "template <typename T>\nT max(T a, T b) {\n    return a > b ? a : b;\n}\n";
    let node = resolve(source, Language::Cpp, 2, 4);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(node.name.as_deref(), Some("max"));
    assert_eq!(node.meta.insertion_point.point, Point::new(0, 0));
}

#[test]
fn cpp_alias_declaration() {
    let node = resolve("using Id = int;\n", Language::Cpp, 0, 7);
    assert_eq!(node.range.node_kind, "alias_declaration");
    assert_eq!(symbol_text(&node), Some("Id"));
}

#[test]
fn cpp_enum_class_enumerator() {
    let source = "enum class Mode {\n    Fast,\n    Slow\n};\n";
    let node = resolve(source, Language::Cpp, 1, 5);
    assert_eq!(node.range.node_kind, "enumerator");
    assert_eq!(symbol_text(&node), Some("Fast"));
}

#[test]
fn cpp_keeps_c_struct_support() {
    let node = resolve("struct Pair {\n    int a;\n};\n", Language::Cpp, 1, 8);
    assert_eq!(node.range.node_kind, "field_declaration");
    assert_eq!(symbol_text(&node), Some("a"));
}
