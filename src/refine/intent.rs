//! Instruction intent classification.
//!
//! Instructions are matched against a decision list: an ordered table of
//! `(rule, predicate)` entries evaluated top to bottom, first match wins.
//! Precedence lives in the table order, not in nested conditionals, so each
//! rule can be read and tested on its own.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An ASCII integer followed by "word" or "words".
static WORD_COUNT_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*words?").unwrap());

/// The editing goal behind an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    WordCountTarget { target: usize },
    Expand,
    AddPoints,
    Shorten,
    Hook,
    Professional,
    Casual,
    Fallback,
}

impl Intent {
    /// Stable snake_case name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WordCountTarget { .. } => "word_count_target",
            Self::Expand => "expand",
            Self::AddPoints => "add_points",
            Self::Shorten => "shorten",
            Self::Hook => "hook",
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordCountTarget { target } => write!(f, "word_count_target({target})"),
            other => f.write_str(other.name()),
        }
    }
}

/// One entry of the decision list.
pub struct Rule {
    /// Rule name, reported by [`classify_with_rule`].
    pub name: &'static str,
    /// Returns the intent when the (lowercased) instruction matches.
    pub matcher: fn(&str) -> Option<Intent>,
}

/// The decision list, highest priority first.
///
/// `add_more` is split out of the expand keywords and placed after
/// `add_points` so "add 2 more points" asks for points, not volume.
pub static RULES: &[Rule] = &[
    Rule {
        name: "word_count_target",
        matcher: match_word_count,
    },
    Rule {
        name: "expand",
        matcher: match_expand,
    },
    Rule {
        name: "add_points",
        matcher: match_add_points,
    },
    Rule {
        name: "add_more",
        matcher: match_add_more,
    },
    Rule {
        name: "shorten",
        matcher: match_shorten,
    },
    Rule {
        name: "hook",
        matcher: match_hook,
    },
    Rule {
        name: "professional",
        matcher: match_professional,
    },
    Rule {
        name: "casual",
        matcher: match_casual,
    },
];

/// Rule name reported when nothing in [`RULES`] matched.
pub const FALLBACK_RULE: &str = "fallback";

/// Classify an already-lowercased instruction.
#[must_use]
pub fn classify(instruction_lower: &str) -> Intent {
    classify_with_rule(instruction_lower).0
}

/// Classify and report which rule fired.
#[must_use]
pub fn classify_with_rule(instruction_lower: &str) -> (Intent, &'static str) {
    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(instruction_lower).map(|intent| (intent, rule.name)))
        .unwrap_or((Intent::Fallback, FALLBACK_RULE))
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

fn match_word_count(text: &str) -> Option<Intent> {
    let caps = WORD_COUNT_TARGET.captures(text)?;
    // A numeral too large to represent is treated as no match.
    let target = caps[1].parse::<usize>().ok()?;
    Some(Intent::WordCountTarget { target })
}

fn match_expand(text: &str) -> Option<Intent> {
    contains_any(text, &["longer", "expand", "detail"]).then_some(Intent::Expand)
}

fn match_add_points(text: &str) -> Option<Intent> {
    (text.contains("add") && contains_any(text, &["point", "step", "tip"]))
        .then_some(Intent::AddPoints)
}

fn match_add_more(text: &str) -> Option<Intent> {
    (text.contains("add") && text.contains("more")).then_some(Intent::Expand)
}

fn match_shorten(text: &str) -> Option<Intent> {
    contains_any(text, &["short", "concise", "brief", "cut"]).then_some(Intent::Shorten)
}

fn match_hook(text: &str) -> Option<Intent> {
    contains_any(text, &["hook", "start", "opener"]).then_some(Intent::Hook)
}

fn match_professional(text: &str) -> Option<Intent> {
    contains_any(text, &["professional", "formal", "corporate"]).then_some(Intent::Professional)
}

fn match_casual(text: &str) -> Option<Intent> {
    contains_any(text, &["casual", "fun", "viral"]).then_some(Intent::Casual)
}
