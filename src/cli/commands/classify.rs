//! Classify command - show the intent an instruction resolves to.

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_ok};
use crate::error::Result;
use crate::refine::classify_with_rule;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Instruction text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub instruction: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    let instruction = args.instruction.join(" ");
    let (intent, rule) = classify_with_rule(&instruction.to_lowercase());

    match ctx.output_format {
        OutputFormat::Json => emit_ok(json!({
            "instruction": instruction,
            "intent": intent,
            "rule": rule,
        })),
        OutputFormat::Plain => {
            println!("{intent}");
            Ok(())
        }
        OutputFormat::Human => {
            println!(
                "{} {} {}",
                instruction.bold(),
                "->".dimmed(),
                intent.to_string().cyan()
            );
            println!("  {} {}", "matched rule:".dimmed(), rule);
            Ok(())
        }
    }
}
