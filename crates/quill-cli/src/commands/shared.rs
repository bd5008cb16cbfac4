use std::path::Path;

use anyhow::Context;
use quill_core::{Language, Point};
use quill_query::{ParsedSource, parse};

use crate::cli::root_commands::PositionArgs;

/// The `--language` override if given, otherwise the language of `path`'s extension.
pub fn resolve_language(path: &Path, language: Option<&str>) -> anyhow::Result<Language> {
    match language {
        Some(name) => name
            .parse()
            .with_context(|| format!("invalid --language '{name}'")),
        None => Language::from_path(path).with_context(|| {
            format!(
                "cannot infer language of '{}'; pass --language",
                path.display()
            )
        }),
    }
}

pub fn parse_file(path: &Path, language: Language) -> anyhow::Result<ParsedSource> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    parse(source, language).with_context(|| format!("failed to parse '{}'", path.display()))
}

/// Parse the file named by `args` and convert its 1-based position.
pub fn load_position(args: &PositionArgs) -> anyhow::Result<(ParsedSource, Point)> {
    let language = resolve_language(&args.file, args.language.as_deref())?;
    let parsed = parse_file(&args.file, language)?;
    let cursor = Point::from_one_based(args.line, args.column)?;
    Ok((parsed, cursor))
}

/// `line:column`, 1-based.
pub fn display_point(point: Point) -> String {
    let (line, column) = point.to_one_based();
    format!("{line}:{column}")
}
