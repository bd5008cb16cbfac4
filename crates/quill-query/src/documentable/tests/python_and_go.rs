use pretty_assertions::assert_eq;

use super::*;

#[test]
fn python_function_docstring_goes_inside() {
    let node = resolve("def area(r):\n    return 3.14 * r * r\n", Language::Python, 1, 6);
    assert_eq!(node.range.node_kind, "function_definition");
    assert_eq!(node.symbol, None);
    assert_eq!(node.meta.insertion_point.placement, Placement::Inside);
    assert_eq!(node.meta.insertion_point.indent, "    ");
}

#[test]
fn python_existing_docstring_hides_hint() {
    let source = "def f():\n    \"\"\"Doc.\"\"\"\n    return 1\n";
    let node = resolve(source, Language::Python, 0, 4);
    assert_eq!(symbol_text(&node), Some("f"));
    assert!(!node.meta.show_hint);
}

#[test]
fn python_method_inside_class_is_innermost() {
    let source = "class Shape:\n    def area(self):\n        return 0\n";
    let node = resolve(source, Language::Python, 1, 9);
    assert_eq!(node.kind, CaptureKind::Function);
    assert_eq!(symbol_text(&node), Some("area"));
    assert_eq!(node.meta.insertion_point.point, Point::new(2, 8));
}

#[test]
fn python_class_name() {
    let node = resolve("class Shape:\n    pass\n", Language::Python, 0, 8);
    assert_eq!(node.range.node_kind, "class_definition");
    assert_eq!(symbol_text(&node), Some("Shape"));
}

#[test]
fn python_module_assignment_goes_above() {
    let node = resolve("MAX = 3\n", Language::Python, 0, 1);
    assert_eq!(node.range.node_kind, "expression_statement");
    assert_eq!(symbol_text(&node), Some("MAX"));
    assert_eq!(node.meta.insertion_point.placement, Placement::Above);
}

#[test]
fn python_decorated_function_checks_comment_above_decorator() {
    let source = "# Cached.\n@cache\ndef f():\n    pass\n";
    let node = resolve(source, Language::Python, 3, 4);
    assert_eq!(node.range.node_kind, "function_definition");
    assert!(!node.meta.show_hint);
}

#[test]
fn go_function() {
    let source = "package main\n\nfunc Serve(addr string) error {\n\treturn nil\n}\n";
    let node = resolve(source, Language::Go, 2, 7);
    assert_eq!(node.range.node_kind, "function_declaration");
    assert_eq!(symbol_text(&node), Some("Serve"));
}

#[test]
fn go_method() {
    let source = "package main\n\nfunc (s *Server) Start() error {\n\treturn nil\n}\n";
    let node = resolve(source, Language::Go, 2, 19);
    assert_eq!(node.range.node_kind, "method_declaration");
    assert_eq!(symbol_text(&node), Some("Start"));
}

#[test]
fn go_struct_type_and_field() {
    let source = "package main\n\ntype Config struct {\n\tAddr string\n}\n";
    let ty = resolve(source, Language::Go, 2, 6);
    assert_eq!(ty.range.node_kind, "type_declaration");
    assert_eq!(symbol_text(&ty), Some("Config"));

    let field = resolve(source, Language::Go, 3, 2);
    assert_eq!(field.range.node_kind, "field_declaration");
    assert_eq!(symbol_text(&field), Some("Addr"));
}

#[test]
fn go_comment_above_hides_hint() {
    let source = "package main\n\n// Serve runs.\nfunc Serve() {\n}\n";
    assert!(!resolve(source, Language::Go, 3, 6).meta.show_hint);
}
