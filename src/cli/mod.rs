//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Hookline - refine social and marketing drafts with plain-language instructions
#[derive(Parser, Debug)]
#[command(name = "hookline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/hookline/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether JSON was asked for on the command line, before config is read.
    #[must_use]
    pub fn machine_requested(&self) -> bool {
        self.machine || self.output_format == Some(OutputFormat::Json)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refine a draft with an instruction
    Refine(commands::refine::RefineArgs),

    /// Show which intent an instruction maps to
    Classify(commands::classify::ClassifyArgs),

    /// Show the structure hookline sees in a draft
    Analyze(commands::analyze::AnalyzeArgs),

    /// Generate a first draft from a source item (JSON)
    Draft(commands::draft::DraftArgs),

    /// Multi-turn refinement sessions
    Session(commands::session::SessionArgs),

    /// Refine every draft file under a directory
    Batch(commands::batch::BatchArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
