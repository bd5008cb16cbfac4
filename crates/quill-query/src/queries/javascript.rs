//! Documentable-node queries for JavaScript, TypeScript, and TSX.
//!
//! TypeScript extends the JavaScript query with interfaces, type aliases,
//! enums, and signatures.

macro_rules! js_documentable_nodes {
    () => {
        r#"
; Functions
;--------------------------------
(function_declaration
    name: (identifier) @symbol.function) @range.function
(generator_function_declaration
    name: (identifier) @symbol.function) @range.function
(function_expression
    name: (identifier) @symbol.function) @range.function

; Variables
;--------------------------------
(lexical_declaration
    (variable_declarator
        name: (identifier) @symbol.identifier)) @range.identifier
(variable_declaration
    (variable_declarator
        name: (identifier) @symbol.identifier)) @range.identifier
(class_declaration
    name: (_) @symbol.identifier) @range.identifier

; Property identifiers
;--------------------------------
(method_definition
    name: (property_identifier) @symbol.function) @range.function
(pair
    key: (property_identifier) @symbol.identifier) @range.identifier

; Comments
;--------------------------------
(comment) @comment
"#
    };
}

pub const JS_DOCUMENTABLE_NODES: &str = js_documentable_nodes!();

pub const TS_DOCUMENTABLE_NODES: &str = concat!(
    js_documentable_nodes!(),
    r#"
; Fields
;--------------------------------
(public_field_definition
    name: (property_identifier) @symbol.identifier) @range.identifier

; Type identifiers
;--------------------------------
(interface_declaration
    name: (type_identifier) @symbol.identifier) @range.identifier
(type_alias_declaration
    name: (type_identifier) @symbol.identifier) @range.identifier
(enum_declaration
    name: (identifier) @symbol.identifier) @range.identifier

; Type signatures
;--------------------------------
(function_signature
    name: (identifier) @symbol.function) @range.function
(interface_declaration
    (interface_body
        (property_signature
            name: (property_identifier) @symbol.identifier) @range.identifier))
(interface_declaration
    (interface_body
        (method_signature
            name: (property_identifier) @symbol.identifier) @range.identifier))
(type_alias_declaration
    (object_type
        (property_signature
            name: (property_identifier) @symbol.identifier) @range.identifier))
"#
);
