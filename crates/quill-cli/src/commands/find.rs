use quill_query::{DocumentableNode, Placement, documentable_node};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PositionArgs;
use crate::commands::shared::{display_point, load_position};
use crate::output::{TextOutput, output};

#[derive(Debug, Serialize)]
pub struct FindResponse {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub node: Option<DocumentableNode>,
}

impl TextOutput for FindResponse {
    fn to_text(&self) -> String {
        let Some(node) = &self.node else {
            return format!(
                "{}:{}:{}: no documentable node",
                self.file, self.line, self.column
            );
        };
        let name = node.name.as_deref().unwrap_or("<anonymous>");
        let placement = match node.meta.insertion_point.placement {
            Placement::Above => "above",
            Placement::Inside => "inside",
        };
        let mut text = format!(
            "{}:{}-{}: {} {name} ({})",
            self.file,
            display_point(node.range.span.start),
            display_point(node.range.span.end),
            node.range.node_kind,
            node.kind
        );
        if node.symbol.is_some() {
            text.push_str(" [on symbol]");
        }
        if node.meta.show_hint {
            text.push_str(&format!(
                "\ndocument {placement} line {}",
                node.meta.insertion_point.point.row + 1
            ));
        } else {
            text.push_str("\nalready documented");
        }
        text
    }
}

/// Handle `quill find`.
pub fn handle(args: &PositionArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (parsed, cursor) = load_position(args)?;
    let node = documentable_node(&parsed, cursor)?;
    tracing::debug!(found = node.is_some(), "find finished");

    let response = FindResponse {
        file: args.file.display().to_string(),
        line: args.line,
        column: args.column,
        node,
    };
    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_core::{Language, Point};
    use quill_query::parse;

    use super::*;

    fn response_at(source: &str, language: Language, line: usize, column: usize) -> FindResponse {
        let parsed = parse(source, language).expect("parse");
        let cursor = Point::from_one_based(line, column).expect("position");
        FindResponse {
            file: "sample".to_string(),
            line,
            column,
            node: documentable_node(&parsed, cursor).expect("query"),
        }
    }

    #[test]
    fn text_names_node_and_insertion_line() {
        let response = response_at("int add(int a) {\n    return a;\n}\n", Language::C, 1, 6);
        assert_eq!(
            response.to_text(),
            "sample:1:1-3:2: function_definition add (function) [on symbol]\ndocument above line 1"
        );
    }

    #[test]
    fn text_without_node() {
        let response = response_at("int a;\n\nint b;\n", Language::C, 2, 1);
        assert_eq!(response.to_text(), "sample:2:1: no documentable node");
    }

    #[test]
    fn json_has_null_node_when_missing() {
        let response = response_at("int a;\n\nint b;\n", Language::C, 2, 1);
        let value = serde_json::to_value(&response).expect("json");
        assert!(value["node"].is_null());
        assert_eq!(value["line"], 2);
    }
}
