//! Draft command - generate the first draft for a source item.

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;

use super::{read_file, read_stdin};
use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_ok};
use crate::draft::{SourceItem, generate_draft};
use crate::error::Result;
use crate::refine::Platform;
use crate::session::Session;

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Source item JSON file ("-" or omitted for stdin)
    #[arg(long)]
    pub item: Option<PathBuf>,

    /// Target platform (defaults to refine.default_platform)
    #[arg(long, short = 'p', value_enum)]
    pub platform: Option<Platform>,

    /// Also start a refinement session from the draft at this path
    #[arg(long, value_name = "PATH")]
    pub session: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &DraftArgs) -> Result<()> {
    let raw = match &args.item {
        Some(path) if path != Path::new("-") => read_file(path)?,
        _ => read_stdin()?,
    };
    let item = SourceItem::from_json(&raw)?;
    let platform = args.platform.unwrap_or(ctx.config.refine.default_platform);
    let draft = generate_draft(&item, platform);

    if let Some(path) = &args.session {
        Session::from_draft(&draft).save(path)?;
    }

    match ctx.output_format {
        OutputFormat::Json => emit_ok(&draft),
        OutputFormat::Plain => {
            println!("{}", draft.content);
            Ok(())
        }
        OutputFormat::Human => {
            println!(
                "{} {} draft for {}",
                "✓".green(),
                platform.to_string().cyan(),
                item.title().bold()
            );
            println!("  {} {}", "source:".dimmed(), item.source_name());
            if let Some(path) = &args.session {
                println!("  {} {}", "session:".dimmed(), path.display());
            }
            println!("{}", "─".repeat(40));
            println!("{}", draft.content);
            Ok(())
        }
    }
}
