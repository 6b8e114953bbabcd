//! Command dispatch.

pub mod directives;
pub mod render;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => render::handle(args),
        Command::Directives { action } => directives::handle(action),
    }
}
