//! Instruction-driven draft refinement.
//!
//! # Architecture
//!
//! A refinement call runs three stages:
//! 1. **Structure analysis** - paragraphs, numbered lists, hashtags, sign-off
//! 2. **Intent classification** - an ordered decision list over the instruction
//! 3. **Transformation** - the operator bound to the intent rewrites the draft
//!
//! Every stage is a pure function of its inputs, so refinements can run in
//! parallel and can be chained on their own output.
//!
//! # Example
//!
//! ```
//! use hookline::refine::{Platform, refine};
//!
//! let result = refine("Hello world. This is a draft. Thanks.", "make it 3 words", Platform::Twitter);
//! assert_eq!(result.content, "Hello world. This...");
//! ```

pub mod intent;
pub mod latency;
pub mod operators;
pub mod structure;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HookError;

pub use intent::{Intent, classify, classify_with_rule};
pub use structure::{ListItem, Structure, analyze};

/// Annotation left behind by older revision tooling.
static REVISION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Revised based on feedback: .*\]").unwrap());

/// Target publishing platform.
///
/// Only affects phrasing around a refinement, never the transformation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Twitter,
    Linkedin,
    Email,
    Blog,
}

impl Platform {
    pub const ALL: [Self; 4] = [Self::Twitter, Self::Linkedin, Self::Email, Self::Blog];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Email => "email",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| HookError::InvalidInput(format!("unknown platform: {s}")))
    }
}

/// Refined draft plus a one-sentence explanation of the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementResult {
    pub content: String,
    pub explanation: String,
}

impl RefinementResult {
    pub fn new(content: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            explanation: explanation.into(),
        }
    }
}

/// Refinement pipeline with its tunables.
#[derive(Debug, Clone, Copy)]
pub struct Refiner {
    /// Remove `[Revised based on feedback: ...]` annotations before refining.
    pub strip_revision_markers: bool,
}

impl Default for Refiner {
    fn default() -> Self {
        Self {
            strip_revision_markers: true,
        }
    }
}

impl Refiner {
    #[must_use]
    pub const fn new(strip_revision_markers: bool) -> Self {
        Self {
            strip_revision_markers,
        }
    }

    /// Refine `content` according to `instruction`.
    ///
    /// Never fails: instructions outside the rule vocabulary get the
    /// fallback rewrite.
    #[must_use]
    pub fn refine(&self, content: &str, instruction: &str, platform: Platform) -> RefinementResult {
        let content = self.prepare(content);
        let instruction_lower = instruction.to_lowercase();

        let structure = analyze(&content);
        let (intent, rule) = classify_with_rule(&instruction_lower);
        debug!(
            %intent,
            rule,
            %platform,
            words = structure::word_count(&content),
            "classified refinement instruction"
        );

        operators::apply(intent, &content, &structure)
    }

    fn prepare(&self, content: &str) -> String {
        if self.strip_revision_markers {
            REVISION_MARKER.replace_all(content, "").trim().to_string()
        } else {
            content.trim().to_string()
        }
    }
}

/// Refine with default settings.
#[must_use]
pub fn refine(content: &str, instruction: &str, platform: Platform) -> RefinementResult {
    Refiner::default().refine(content, instruction, platform)
}
