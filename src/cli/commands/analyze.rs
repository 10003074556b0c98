//! Analyze command - print the structural model of a draft.

use clap::Args;
use serde_json::json;

use super::DraftInput;
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_ok};
use crate::error::Result;
use crate::refine::structure::{Structure, analyze, word_count};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: DraftInput,
}

pub fn run(ctx: &AppContext, args: &AnalyzeArgs) -> Result<()> {
    let content = args.input.read()?;
    let structure = analyze(&content);
    let words = word_count(&content);

    match ctx.output_format {
        OutputFormat::Json => emit_ok(json!({
            "words": words,
            "next_ordinal": structure.next_ordinal(),
            "structure": structure,
        })),
        OutputFormat::Plain => {
            println!(
                "words={words} paragraphs={} list_items={} hashtags={} sign_off={}",
                structure.paragraphs.len(),
                structure.list_items.len(),
                structure.hashtags.len(),
                structure.has_sign_off()
            );
            Ok(())
        }
        OutputFormat::Human => {
            emit_human(render_human(&structure, words));
            Ok(())
        }
    }
}

fn render_human(structure: &Structure, words: usize) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout
        .title("Draft structure")
        .kv("Words", &words.to_string())
        .kv("Paragraphs", &structure.paragraphs.len().to_string())
        .kv("Lines", &structure.lines.len().to_string());

    if structure.has_list() {
        layout.blank().section("Numbered list");
        for item in &structure.list_items {
            let line = &structure.lines[item.line_index];
            layout.bullet(&format!("line {}: {}", item.line_index + 1, line.trim()));
        }
        layout.kv("Next ordinal", &structure.next_ordinal().to_string());
    }

    if !structure.hashtags.is_empty() {
        layout.blank().section("Hashtags");
        layout.push_line(structure.hashtags.join(" "));
    }

    if let Some(idx) = structure.sign_off_line {
        layout
            .blank()
            .kv("Sign-off", &format!("line {}: {}", idx + 1, structure.lines[idx].trim()));
    }

    layout
}
