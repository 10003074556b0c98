//! Per-invocation application context.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::refine::Refiner;

/// Everything a command needs: resolved config and output settings.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub project_root: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let output_format =
            OutputFormat::from_args(cli.machine, cli.output_format, config.output.format);

        Ok(Self {
            config,
            output_format,
            project_root,
        })
    }

    #[must_use]
    pub const fn refiner(&self) -> Refiner {
        self.config.refiner()
    }

    #[must_use]
    pub const fn wrap_width(&self) -> usize {
        self.config.output.wrap_width
    }
}
