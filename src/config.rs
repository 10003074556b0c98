use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{HookError, Result};
use crate::refine::{Platform, Refiner};

/// Project-level config file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".hookline.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub refine: RefineConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("HOOKLINE_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Path of the per-user config file.
    pub fn global_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| HookError::MissingConfig("config directory not found".to_string()))?
            .join("hookline/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        // No config dir (e.g. a bare container) just means no global layer.
        match Self::global_path() {
            Ok(path) => Self::load_patch(&path),
            Err(_) => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| HookError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| HookError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.refine {
            self.refine.merge(patch);
        }
        if let Some(patch) = patch.latency {
            self.latency.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
        if let Some(patch) = patch.batch {
            self.batch.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("HOOKLINE_DEFAULT_PLATFORM") {
            self.refine.default_platform = value.parse()?;
        }
        if let Some(value) = env_usize("HOOKLINE_MAX_INSTRUCTION_CHARS")? {
            self.refine.max_instruction_chars = value;
        }
        if let Some(value) = env_bool("HOOKLINE_STRIP_REVISION_MARKERS") {
            self.refine.strip_revision_markers = value;
        }

        if let Some(value) = env_bool("HOOKLINE_LATENCY_ENABLED") {
            self.latency.enabled = value;
        }
        if let Some(value) = env_duration("HOOKLINE_LATENCY_BASE")? {
            self.latency.base = value;
        }
        if let Some(value) = env_duration("HOOKLINE_LATENCY_JITTER")? {
            self.latency.jitter = value;
        }

        if let Some(value) = env_string("HOOKLINE_OUTPUT_FORMAT") {
            self.output.format = parse_output_format(&value)?;
        }
        if let Some(value) = env_usize("HOOKLINE_WRAP_WIDTH")? {
            self.output.wrap_width = value;
        }

        if let Some(values) = env_list("HOOKLINE_BATCH_EXTENSIONS") {
            self.batch.extensions = values;
        }

        Ok(())
    }

    /// Refinement pipeline configured from the `[refine]` section.
    #[must_use]
    pub const fn refiner(&self) -> Refiner {
        Refiner::new(self.refine.strip_revision_markers)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineConfig {
    #[serde(default)]
    pub default_platform: Platform,
    #[serde(default = "default_max_instruction_chars")]
    pub max_instruction_chars: usize,
    #[serde(default = "default_true")]
    pub strip_revision_markers: bool,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            default_platform: Platform::Twitter,
            max_instruction_chars: default_max_instruction_chars(),
            strip_revision_markers: true,
        }
    }
}

impl RefineConfig {
    fn merge(&mut self, patch: RefinePatch) {
        if let Some(value) = patch.default_platform {
            self.default_platform = value;
        }
        if let Some(value) = patch.max_instruction_chars {
            self.max_instruction_chars = value;
        }
        if let Some(value) = patch.strip_revision_markers {
            self.strip_revision_markers = value;
        }
    }
}

/// Simulated service latency for the async refine boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_latency_base", with = "humantime_serde")]
    pub base: Duration,
    #[serde(default = "default_latency_jitter", with = "humantime_serde")]
    pub jitter: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base: default_latency_base(),
            jitter: default_latency_jitter(),
        }
    }
}

impl LatencyConfig {
    fn merge(&mut self, patch: LatencyPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.base {
            self.base = value;
        }
        if let Some(value) = patch.jitter {
            self.jitter = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            wrap_width: default_wrap_width(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.wrap_width {
            self.wrap_width = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// File extensions picked up when walking directories.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Worker threads, 0 for one per core.
    #[serde(default)]
    pub threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string()],
            threads: 0,
        }
    }
}

impl BatchConfig {
    fn merge(&mut self, patch: BatchPatch) {
        if let Some(values) = patch.extensions {
            self.extensions = values;
        }
        if let Some(value) = patch.threads {
            self.threads = value;
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_instruction_chars() -> usize {
    500
}

const fn default_latency_base() -> Duration {
    Duration::from_millis(1000)
}

const fn default_latency_jitter() -> Duration {
    Duration::from_millis(800)
}

const fn default_wrap_width() -> usize {
    80
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub refine: Option<RefinePatch>,
    pub latency: Option<LatencyPatch>,
    pub output: Option<OutputPatch>,
    pub batch: Option<BatchPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RefinePatch {
    pub default_platform: Option<Platform>,
    pub max_instruction_chars: Option<usize>,
    pub strip_revision_markers: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LatencyPatch {
    pub enabled: Option<bool>,
    #[serde(default, with = "humantime_serde")]
    pub base: Option<Duration>,
    #[serde(default, with = "humantime_serde")]
    pub jitter: Option<Duration>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
    pub wrap_width: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BatchPatch {
    pub extensions: Option<Vec<String>>,
    pub threads: Option<usize>,
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        "plain" => Ok(OutputFormat::Plain),
        _ => Err(HookError::Config(format!(
            "invalid output format {value} (expected human|json|plain)"
        ))),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| HookError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_duration(key: &str) -> Result<Option<Duration>> {
    match std::env::var(key) {
        Ok(value) => humantime_serde::re::humantime::parse_duration(&value)
            .map(Some)
            .map_err(|err| HookError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
}
