use quill_config::QuillConfig;
use quill_snapshot::{Annotator, Fixture, documentable_captures, snapshot_path};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnnotateArgs;
use crate::commands::shared::resolve_language;
use crate::output::{TextOutput, output};

#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    pub fixture: String,
    pub snapshot: String,
    pub content: String,
}

impl TextOutput for AnnotateResponse {
    fn to_text(&self) -> String {
        self.content.clone()
    }
}

/// Handle `quill annotate`.
pub fn handle(args: &AnnotateArgs, config: &QuillConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let language = resolve_language(&args.fixture, args.language.as_deref())?;
    let fixture = Fixture::load(&args.fixture, Some(language))?;
    let content = Annotator::new(language)
        .with_tab_width(config.query.tab_width)
        .render(&fixture, documentable_captures)?;

    let response = AnnotateResponse {
        fixture: fixture.path.display().to_string(),
        snapshot: snapshot_path(&fixture.path).display().to_string(),
        content,
    };
    output(&response, flags.format)
}
