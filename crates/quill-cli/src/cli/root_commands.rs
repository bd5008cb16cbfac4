use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Find the documentable node at a position.
    Find(PositionArgs),
    /// Print the doc comment template for the node at a position.
    Template(PositionArgs),
    /// Print the annotated snapshot of a fixture file.
    Annotate(AnnotateArgs),
    /// Match fixtures against their snapshots.
    Check(CheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PositionArgs {
    /// Source file.
    pub file: PathBuf,
    /// 1-based line number.
    #[arg(long)]
    pub line: usize,
    /// 1-based column number.
    #[arg(long)]
    pub column: usize,
    /// Language override (otherwise inferred from the extension).
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AnnotateArgs {
    /// Fixture file of snippets with `|` markers.
    pub fixture: PathBuf,
    /// Language override (otherwise inferred from the extension).
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Fixture files; defaults to every fixture in the configured fixtures directory.
    pub fixtures: Vec<PathBuf>,
    /// Rewrite snapshots instead of comparing them.
    #[arg(long)]
    pub update: bool,
    /// Fail on missing snapshots instead of writing them.
    #[arg(long, conflicts_with = "update")]
    pub no_create: bool,
}
