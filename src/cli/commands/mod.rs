//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{HookError, Result};

pub mod analyze;
pub mod batch;
pub mod classify;
pub mod completions;
pub mod config;
pub mod draft;
pub mod refine;
pub mod session;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Refine(args) => refine::run(ctx, args),
        Commands::Classify(args) => classify::run(ctx, args),
        Commands::Analyze(args) => analyze::run(ctx, args),
        Commands::Draft(args) => draft::run(ctx, args),
        Commands::Session(args) => session::run(ctx, args),
        Commands::Batch(args) => batch::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

/// Where a command reads its draft from. Defaults to stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct DraftInput {
    /// Read the draft from a file ("-" for stdin)
    #[arg(long, short = 'f', conflicts_with = "content")]
    pub file: Option<PathBuf>,

    /// Draft text given inline
    #[arg(long, short = 'c')]
    pub content: Option<String>,
}

impl DraftInput {
    pub fn read(&self) -> Result<String> {
        if let Some(content) = &self.content {
            return Ok(content.clone());
        }
        match &self.file {
            Some(path) if path != Path::new("-") => read_file(path),
            _ => read_stdin(),
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        HookError::InvalidInput(format!("cannot read {}: {err}", path.display()))
    })
}

pub(crate) fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
