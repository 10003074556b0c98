//! Refine command - apply one instruction to a draft.

use clap::Args;
use colored::Colorize;
use serde_json::json;
use tracing::debug;

use super::DraftInput;
use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_ok};
use crate::error::{HookError, Result};
use crate::refine::latency::refine_with_latency;
use crate::refine::{Platform, RefinementResult, classify_with_rule};
use crate::session::Session;

#[derive(Args, Debug)]
pub struct RefineArgs {
    #[command(flatten)]
    pub input: DraftInput,

    /// What to change, in plain words ("make it shorter", "add 2 more points")
    #[arg(long, short = 'i')]
    pub instruction: String,

    /// Target platform (defaults to refine.default_platform)
    #[arg(long, short = 'p', value_enum)]
    pub platform: Option<Platform>,

    /// Simulate service latency even if disabled in config
    #[arg(long)]
    pub latency: bool,
}

pub fn run(ctx: &AppContext, args: &RefineArgs) -> Result<()> {
    Session::validate_instruction(&args.instruction, ctx.config.refine.max_instruction_chars)?;
    let content = args.input.read()?;
    let platform = args.platform.unwrap_or(ctx.config.refine.default_platform);

    let result = execute(ctx, &content, &args.instruction, platform, args.latency)?;
    let (intent, rule) = classify_with_rule(&args.instruction.to_lowercase());

    match ctx.output_format {
        OutputFormat::Json => emit_ok(json!({
            "platform": platform,
            "instruction": args.instruction,
            "intent": intent,
            "rule": rule,
            "content": result.content,
            "explanation": result.explanation,
        })),
        OutputFormat::Plain => {
            println!("{}", result.content);
            Ok(())
        }
        OutputFormat::Human => {
            println!("{} {}", "✓".green(), result.explanation.bold());
            println!(
                "  {} {} {}",
                "intent:".dimmed(),
                intent.to_string().cyan(),
                format!("(rule {rule}, {platform})").dimmed()
            );
            println!("{}", "─".repeat(40));
            println!("{}", result.content);
            Ok(())
        }
    }
}

/// Refine through the async latency boundary when latency is on.
pub(crate) fn execute(
    ctx: &AppContext,
    content: &str,
    instruction: &str,
    platform: Platform,
    force_latency: bool,
) -> Result<RefinementResult> {
    let refiner = ctx.refiner();
    let mut latency = ctx.config.latency.clone();
    latency.enabled |= force_latency;

    if !latency.enabled {
        return Ok(refiner.refine(content, instruction, platform));
    }

    debug!(base = ?latency.base, jitter = ?latency.jitter, "refining with simulated latency");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|err| HookError::Runtime(format!("start async runtime: {err}")))?;
    Ok(runtime.block_on(refine_with_latency(
        refiner,
        content,
        instruction,
        platform,
        &latency,
    )))
}
