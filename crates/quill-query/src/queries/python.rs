//! Documentable-node query for Python.

pub const PYTHON_DOCUMENTABLE_NODES: &str = r#"
; Functions and classes
;--------------------------------
(function_definition
    name: (identifier) @symbol.function) @range.function
(class_definition
    name: (identifier) @symbol.identifier) @range.identifier

; Assignments
;--------------------------------
(expression_statement
    (assignment
        left: (identifier) @symbol.identifier)) @range.identifier

; Comments
;--------------------------------
(comment) @comment
"#;
