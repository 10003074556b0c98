//! Batch command - refine every draft file under a directory in parallel.

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_ok};
use crate::error::{HookError, Result};
use crate::refine::{Platform, Refiner};
use crate::session::Session;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory (or single file) of drafts
    pub path: PathBuf,

    /// Instruction applied to every draft
    #[arg(long, short = 'i')]
    pub instruction: String,

    /// Target platform (defaults to refine.default_platform)
    #[arg(long, short = 'p', value_enum)]
    pub platform: Option<Platform>,

    /// Write refined drafts here, mirroring the input layout
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

/// Outcome for one draft file.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub explanation: String,
    pub content: String,
}

pub fn run(ctx: &AppContext, args: &BatchArgs) -> Result<()> {
    Session::validate_instruction(&args.instruction, ctx.config.refine.max_instruction_chars)?;
    let platform = args.platform.unwrap_or(ctx.config.refine.default_platform);

    let files = collect_drafts(&args.path, &ctx.config.batch.extensions)?;
    info!(count = files.len(), root = %args.path.display(), "refining drafts");

    let refiner = ctx.refiner();
    let job = || {
        refine_all(
            &files,
            &args.path,
            refiner,
            &args.instruction,
            platform,
            args.out_dir.as_deref(),
        )
    };
    let entries = if ctx.config.batch.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(ctx.config.batch.threads)
            .build()
            .map_err(|err| HookError::Runtime(format!("build thread pool: {err}")))?
            .install(job)?
    } else {
        job()?
    };

    match ctx.output_format {
        OutputFormat::Json => emit_ok(serde_json::json!({
            "count": entries.len(),
            "entries": entries,
        })),
        OutputFormat::Plain => {
            for entry in &entries {
                if entry.output.is_none() {
                    println!("{}", entry.content);
                    println!();
                }
            }
            Ok(())
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No drafts found under {}.", args.path.display());
                return Ok(());
            }
            for entry in &entries {
                println!("{} {}", "✓".green(), entry.path.display().to_string().bold());
                match &entry.output {
                    Some(output) => println!("  {} {}", "->".dimmed(), output.display()),
                    None => {
                        println!("{}", entry.content);
                    }
                }
                println!();
            }
            println!(
                "Refined {} drafts: {}",
                entries.len().to_string().cyan(),
                entries[0].explanation.dimmed()
            );
            Ok(())
        }
    }
}

/// Draft files under `root` with a matching extension, in path order.
///
/// A missing root is an error; unreadable entries below it are skipped.
pub fn collect_drafts(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(HookError::InvalidInput(format!(
            "batch path not found: {}",
            root.display()
        )));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable batch entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| has_extension(path, extensions))
        .collect();
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}

fn refine_all(
    files: &[PathBuf],
    root: &Path,
    refiner: Refiner,
    instruction: &str,
    platform: Platform,
    out_dir: Option<&Path>,
) -> Result<Vec<BatchEntry>> {
    files
        .par_iter()
        .map(|path| -> Result<BatchEntry> {
            let content = super::read_file(path)?;
            let result = refiner.refine(&content, instruction, platform);

            let output = match out_dir {
                Some(dir) => {
                    let relative = path.strip_prefix(root).unwrap_or(path);
                    let relative = if relative.as_os_str().is_empty() {
                        Path::new(path.file_name().unwrap_or(path.as_os_str()))
                    } else {
                        relative
                    };
                    let target = dir.join(relative);
                    if let Some(parent) = target.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&target, &result.content)?;
                    debug!(from = %path.display(), to = %target.display(), "wrote refined draft");
                    Some(target)
                }
                None => None,
            };

            Ok(BatchEntry {
                path: path.clone(),
                output,
                explanation: result.explanation,
                content: result.content,
            })
        })
        .collect()
}
