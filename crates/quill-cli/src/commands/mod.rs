use quill_config::QuillConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;

pub mod annotate;
pub mod check;
pub mod find;
pub mod shared;
pub mod template;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &QuillConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Find(args) => find::handle(args, flags),
        Commands::Template(args) => template::handle(args, flags),
        Commands::Annotate(args) => annotate::handle(args, config, flags),
        Commands::Check(args) => check::handle(args, config, flags),
    }
}
