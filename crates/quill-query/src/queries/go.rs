//! Documentable-node query for Go.

pub const GO_DOCUMENTABLE_NODES: &str = r#"
; Functions
;--------------------------------
(function_declaration
    name: (identifier) @symbol.function) @range.function
(method_declaration
    name: (field_identifier) @symbol.function) @range.function

; Declarations
;--------------------------------
(type_declaration
    (type_spec
        name: (type_identifier) @symbol.identifier)) @range.identifier
(const_declaration
    (const_spec
        name: (identifier) @symbol.identifier)) @range.identifier
(var_declaration
    (var_spec
        name: (identifier) @symbol.identifier)) @range.identifier
(field_declaration
    name: (field_identifier) @symbol.identifier) @range.identifier

; Comments
;--------------------------------
(comment) @comment
"#;
