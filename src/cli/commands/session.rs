//! Session command - multi-turn refinement persisted as JSON.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use colored::Colorize;
use serde_json::json;

use super::{DraftInput, read_file};
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_ok};
use crate::draft::{SourceItem, generate_draft};
use crate::error::{HookError, Result};
use crate::refine::Platform;
use crate::session::{Role, Session};

#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Start a session from a draft
    New(NewArgs),

    /// Apply an instruction to the session's current draft
    Refine(RefineArgs),

    /// Show the current draft and conversation
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Session file to create
    pub path: PathBuf,

    /// Generate the starting draft from a source item (JSON) instead
    #[arg(long, conflicts_with_all = ["file", "content"])]
    pub item: Option<PathBuf>,

    #[command(flatten)]
    pub input: DraftInput,

    /// Target platform (defaults to refine.default_platform)
    #[arg(long, short = 'p', value_enum)]
    pub platform: Option<Platform>,

    /// Overwrite an existing session file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct RefineArgs {
    /// Session file
    pub path: PathBuf,

    /// What to change, in plain words
    #[arg(long, short = 'i')]
    pub instruction: String,

    /// Simulate service latency even if disabled in config
    #[arg(long)]
    pub latency: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Session file
    pub path: PathBuf,

    /// Include the conversation log
    #[arg(long)]
    pub turns: bool,
}

pub fn run(ctx: &AppContext, args: &SessionArgs) -> Result<()> {
    match &args.command {
        SessionCommand::New(new_args) => run_new(ctx, new_args),
        SessionCommand::Refine(refine_args) => run_refine(ctx, refine_args),
        SessionCommand::Show(show_args) => run_show(ctx, show_args),
    }
}

fn run_new(ctx: &AppContext, args: &NewArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(HookError::InvalidInput(format!(
            "session file {} already exists (use --force to overwrite)",
            args.path.display()
        )));
    }

    let platform = args.platform.unwrap_or(ctx.config.refine.default_platform);
    let session = match &args.item {
        Some(item) => {
            let item = SourceItem::from_json(&read_file(item)?)?;
            Session::from_draft(&generate_draft(&item, platform))
        }
        None => Session::new(args.input.read()?.trim(), platform),
    };
    session.save(&args.path)?;

    match ctx.output_format {
        OutputFormat::Json => emit_ok(json!({
            "id": session.id,
            "path": args.path.display().to_string(),
            "platform": session.platform,
            "content": session.content,
        })),
        OutputFormat::Plain => {
            println!("{}", session.id);
            Ok(())
        }
        OutputFormat::Human => {
            println!(
                "{} Started {} session {}",
                "✓".green(),
                platform.to_string().cyan(),
                session.id.to_string().dimmed()
            );
            println!("  {} {}", "file:".dimmed(), args.path.display());
            Ok(())
        }
    }
}

fn run_refine(ctx: &AppContext, args: &RefineArgs) -> Result<()> {
    let mut session = Session::load(&args.path)?;
    Session::validate_instruction(&args.instruction, ctx.config.refine.max_instruction_chars)?;

    let result = super::refine::execute(
        ctx,
        &session.content,
        &args.instruction,
        session.platform,
        args.latency,
    )?;
    session.record(&args.instruction, &result);
    session.save(&args.path)?;

    match ctx.output_format {
        OutputFormat::Json => emit_ok(json!({
            "id": session.id,
            "refinements": session.refinement_count(),
            "content": result.content,
            "explanation": result.explanation,
        })),
        OutputFormat::Plain => {
            println!("{}", result.content);
            Ok(())
        }
        OutputFormat::Human => {
            println!("{} {}", "✓".green(), result.explanation.bold());
            println!("{}", "─".repeat(40));
            println!("{}", result.content);
            Ok(())
        }
    }
}

fn run_show(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let session = Session::load(&args.path)?;

    match ctx.output_format {
        OutputFormat::Json => emit_ok(&session),
        OutputFormat::Plain => {
            println!("{}", session.content);
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout
                .title(&format!("Session {}", session.id))
                .kv("Platform", session.platform.as_str())
                .kv("Refinements", &session.refinement_count().to_string())
                .kv(
                    "Updated",
                    &session.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                )
                .blank()
                .push_line(session.content.clone());

            if args.turns {
                layout.blank().section("Conversation");
                for turn in &session.turns {
                    let speaker = match turn.role {
                        Role::User => "you",
                        Role::Assistant => "hookline",
                    };
                    layout.wrapped(&format!("{speaker}: {}", turn.text), ctx.wrap_width());
                }
            }
            emit_human(layout);
            Ok(())
        }
    }
}
