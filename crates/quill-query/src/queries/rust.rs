//! Documentable-node query for Rust.

pub const RUST_DOCUMENTABLE_NODES: &str = r#"
; Functions
;--------------------------------
(function_item
    name: (identifier) @symbol.function) @range.function
(function_signature_item
    name: (identifier) @symbol.function) @range.function
(macro_definition
    name: (identifier) @symbol.function) @range.function

; Items
;--------------------------------
(struct_item
    name: (type_identifier) @symbol.identifier) @range.identifier
(enum_item
    name: (type_identifier) @symbol.identifier) @range.identifier
(union_item
    name: (type_identifier) @symbol.identifier) @range.identifier
(trait_item
    name: (type_identifier) @symbol.identifier) @range.identifier
(static_item
    name: (identifier) @symbol.identifier) @range.identifier
(mod_item
    name: (identifier) @symbol.identifier) @range.identifier
(use_declaration) @symbol.identifier @range.identifier

; Comments
;--------------------------------
(line_comment) @comment
(block_comment) @comment
"#;
