use anyhow::Context;
use quill_query::{InsertionPoint, Placement, apply_template, doc_comment_template, documentable_node};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PositionArgs;
use crate::commands::shared::load_position;
use crate::output::{TextOutput, output};

#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    pub file: String,
    pub name: Option<String>,
    pub insertion_point: InsertionPoint,
    pub text: String,
    /// The node already carries a doc comment.
    pub documented: bool,
    /// The source with the template inserted.
    pub preview: String,
}

impl TextOutput for TemplateResponse {
    fn to_text(&self) -> String {
        let placement = match self.insertion_point.placement {
            Placement::Above => "before",
            Placement::Inside => "inside body at",
        };
        let mut text = format!(
            "insert {placement} line {}",
            self.insertion_point.point.row + 1
        );
        if self.documented {
            text.push_str(" (already documented)");
        }
        text.push('\n');
        text.push_str(&self.text);
        text.truncate(text.trim_end_matches('\n').len());
        text
    }
}

/// Handle `quill template`.
pub fn handle(args: &PositionArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (parsed, cursor) = load_position(args)?;
    let node = documentable_node(&parsed, cursor)?.with_context(|| {
        format!(
            "no documentable node at {}:{}:{}",
            args.file.display(),
            args.line,
            args.column
        )
    })?;
    let template = doc_comment_template(&node);

    let response = TemplateResponse {
        file: args.file.display().to_string(),
        name: node.name.clone(),
        preview: apply_template(parsed.source(), &template),
        insertion_point: template.insertion_point,
        text: template.text,
        documented: !node.meta.show_hint,
    };
    output(&response, flags.format)
}
