//! Documentation comment skeletons for a resolved documentable node.

use quill_core::Language;
use serde::{Deserialize, Serialize};

use crate::documentable::{DocumentableNode, InsertionPoint, Placement};

/// A ready-to-insert comment skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTemplate {
    pub insertion_point: InsertionPoint,
    /// Full lines, each ending in `\n`, already indented.
    pub text: String,
}

/// Build the comment skeleton for `node` in its language's doc convention.
#[must_use]
pub fn doc_comment_template(node: &DocumentableNode) -> DocTemplate {
    let insertion_point = node.meta.insertion_point.clone();
    let indent = insertion_point.indent.as_str();

    let text = match (node.language, insertion_point.placement) {
        (Language::Python, Placement::Inside) => format!("{indent}\"\"\"\n{indent}\"\"\"\n"),
        (Language::Python, Placement::Above) => format!("{indent}# \n"),
        (Language::Rust, _) => format!("{indent}/// \n"),
        (Language::Go, _) => match node.name.as_deref() {
            Some(name) => format!("{indent}// {name} \n"),
            None => format!("{indent}// \n"),
        },
        (
            Language::C
            | Language::Cpp
            | Language::JavaScript
            | Language::TypeScript
            | Language::Tsx,
            _,
        ) => format!("{indent}/**\n{indent} * \n{indent} */\n"),
    };

    DocTemplate {
        insertion_point,
        text,
    }
}

/// Insert `template` into `source` before its insertion row.
///
/// Rows past the end of the source append the template at the end.
#[must_use]
pub fn apply_template(source: &str, template: &DocTemplate) -> String {
    let row = template.insertion_point.point.row;
    let mut out = String::with_capacity(source.len() + template.text.len());
    let mut inserted = false;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index == row {
            out.push_str(&template.text);
            inserted = true;
        }
        out.push_str(line);
    }
    if !inserted {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&template.text);
    }
    out
}
