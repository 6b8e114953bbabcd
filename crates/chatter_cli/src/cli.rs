//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Render chat templates into ordered, addressed message batches
#[derive(Parser)]
#[command(name = "chatter", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compose a template and print the resulting batches
    Render(RenderArgs),
    /// Inspect and call template directives
    Directives {
        #[command(subcommand)]
        action: DirectivesAction,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template name, with or without extension
    #[arg(short, long)]
    pub template: String,

    /// Templates directory (default: CHATTER_TEMPLATES_DIR or ./templates)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Template data: a JSON object or a path to a JSON file
    #[arg(short, long)]
    pub data: Option<String>,

    /// Channel the conversation happens in
    #[arg(long)]
    pub channel: Option<String>,

    /// User who triggered the composition
    #[arg(long, default_value = "user")]
    pub user: String,

    /// Instance that received the input
    #[arg(long, default_value = "chatter")]
    pub receiver: String,

    /// Treat the input as a private message
    #[arg(long)]
    pub private: bool,

    /// Number of command prefixes used
    #[arg(long, default_value_t = 1)]
    pub prefixes: u32,

    /// Split lines longer than this many characters
    #[arg(long)]
    pub max_length: Option<usize>,
}

#[derive(Subcommand)]
pub enum DirectivesAction {
    /// List all registered directives
    List,
    /// Show directive details and parameter schema
    Info {
        /// Directive name
        directive: String,
    },
    /// Run a directive over a body
    Call {
        /// Directive name
        directive: String,
        /// JSON arguments
        #[arg(short, long, default_value = "{}")]
        args: String,
        /// Body text; `\n` sequences become line breaks
        #[arg(short, long)]
        body: Option<String>,
    },
}
