//! Documentable-node queries for C and C++.
//!
//! C++ reuses the C type and variable patterns and replaces the function
//! patterns, since C++ declarators may be qualified, destructors, or operators.

macro_rules! c_types_and_variables {
    () => {
        r#"
; Types
;--------------------------------
(struct_specifier
    name: (type_identifier) @symbol.identifier
    body: (field_declaration_list)) @range.identifier
(union_specifier
    name: (type_identifier) @symbol.identifier
    body: (field_declaration_list)) @range.identifier
(enum_specifier
    name: (type_identifier) @symbol.identifier
    body: (enumerator_list)) @range.identifier
(type_definition
    declarator: (type_identifier) @symbol.identifier) @range.identifier

; Variables and members
;--------------------------------
(declaration
    declarator: (init_declarator
        declarator: (identifier) @symbol.identifier)) @range.identifier
(declaration
    declarator: (identifier) @symbol.identifier) @range.identifier
(field_declaration
    declarator: (field_identifier) @symbol.identifier) @range.identifier
(enumerator
    name: (identifier) @symbol.identifier) @range.identifier
(preproc_def
    name: (identifier) @symbol.identifier) @range.identifier

; Comments
;--------------------------------
(comment) @comment
"#
    };
}

pub const C_DOCUMENTABLE_NODES: &str = concat!(
    r#"
; Functions
;--------------------------------
(function_definition
    declarator: (function_declarator
        declarator: (identifier) @symbol.function)) @range.function
(function_definition
    declarator: (pointer_declarator
        declarator: (function_declarator
            declarator: (identifier) @symbol.function))) @range.function
(declaration
    declarator: (function_declarator
        declarator: (identifier) @symbol.function)) @range.function
(preproc_function_def
    name: (identifier) @symbol.function) @range.function
"#,
    c_types_and_variables!()
);

pub const CPP_DOCUMENTABLE_NODES: &str = concat!(
    r#"
; Functions and methods
;--------------------------------
(function_definition
    declarator: (function_declarator
        declarator: (_) @symbol.function)) @range.function
(function_definition
    declarator: (pointer_declarator
        declarator: (function_declarator
            declarator: (_) @symbol.function))) @range.function
(declaration
    declarator: (function_declarator
        declarator: (_) @symbol.function)) @range.function
(field_declaration
    declarator: (function_declarator
        declarator: (_) @symbol.function)) @range.function
(preproc_function_def
    name: (identifier) @symbol.function) @range.function

; Classes, namespaces, aliases
;--------------------------------
(class_specifier
    name: (_) @symbol.identifier
    body: (field_declaration_list)) @range.identifier
(namespace_definition
    name: (_) @symbol.identifier) @range.identifier
(alias_declaration
    name: (type_identifier) @symbol.identifier) @range.identifier
"#,
    c_types_and_variables!()
);
