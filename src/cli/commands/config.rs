//! Config command - show the effective configuration and where it comes from.

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::app::AppContext;
use crate::cli::output::{OutputFormat, emit_ok};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::{HookError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Only print the config file locations
    #[arg(long)]
    pub paths: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    let global = Config::global_path().ok();
    let project = ctx.project_root.join(PROJECT_CONFIG_FILE);

    match ctx.output_format {
        OutputFormat::Json => {
            let config = if args.paths {
                serde_json::Value::Null
            } else {
                serde_json::to_value(&ctx.config)?
            };
            emit_ok(json!({
                "paths": {
                    "global": global.as_ref().map(|p| p.display().to_string()),
                    "project": project.display().to_string(),
                },
                "config": config,
            }))
        }
        OutputFormat::Plain | OutputFormat::Human => {
            let human = ctx.output_format.use_colors();
            let describe = |label: &str, path: &std::path::Path| {
                let state = if path.exists() { "found" } else { "missing" };
                if human {
                    println!("{} {} ({})", format!("{label}:").dimmed(), path.display(), state);
                } else {
                    println!("# {label}: {} ({state})", path.display());
                }
            };
            if let Some(path) = &global {
                describe("global", path);
            }
            describe("project", &project);

            if !args.paths {
                let raw = toml::to_string_pretty(&ctx.config)
                    .map_err(|err| HookError::Serialization(format!("render config: {err}")))?;
                println!();
                print!("{raw}");
            }
            Ok(())
        }
    }
}
