//! Transformation operators, one per [`Intent`].
//!
//! Every operator is a pure function of the draft and its [`Structure`]:
//! new content is built as a fresh sequence, the inputs are never mutated.
//! Each returns the full replacement text plus a fixed explanation.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use super::RefinementResult;
use super::intent::Intent;
use super::structure::{Structure, is_hashtag, word_count};

// =============================================================================
// FIXED TEXT
// =============================================================================

const WORD_TARGET_FILLER: &str = "Moreover, when we look at the data, the trend becomes even clearer. Experts suggest that early adoption provides a competitive moat that is hard to replicate later. This implies that waiting is not just a neutral option, but a potential risk.\n\nFinally, consider the long-term ROI. While the initial setup requires effort, the automated efficiency gains compound over time. It is a strategic imperative for modern businesses.";

const ELABORATION_BLOCK: &str = "To elaborate further, there are three key factors driving this shift:\n1. Market Saturation: Traditional channels are becoming noisy.\n2. Tech Accessibility: Tools are now cheaper and faster.\n3. Consumer Expectations: Personalization is no longer optional.\n\nUnderstanding these drivers is crucial for the next phase of growth.";

const NEW_POINTS: [&str; 2] = [
    "Consistency is the silent killer of most strategies.",
    "Leverage community feedback loops early on.",
];

const KEY_POINTS_HEADER: &str = "Here are some key points:";

/// Opener swapped in by the hook operator.
pub const HOOK_OPENER: &str = "STOP scrolling. 🛑 You need to hear this.";

/// Header prepended by the fallback operator.
pub const FALLBACK_HEADER: &str = "Here is a revised version:";

const CASUAL_FIRST_LINE_EMOJI: &str = "🤯";

const EXPANDED_EXPLANATION: &str = "I've added more context and detail into the body of the post.";
const POINTS_MERGED_EXPLANATION: &str =
    "I've integrated new actionable points directly into your list.";
const POINTS_ADDED_EXPLANATION: &str = "I've added a list of points to the post.";
const SHORTENED_EXPLANATION: &str =
    "I cut out the fluff. Kept the hook, the core insight, and the CTA.";
const HOOK_EXPLANATION: &str =
    "I replaced the opener with something much more attention-grabbing.";
const PROFESSIONAL_EXPLANATION: &str =
    "I stripped out the emojis and informal language to make it boardroom-ready.";
const CASUAL_EXPLANATION: &str =
    "I sprinkled in some personality and emojis to boost engagement.";
const FALLBACK_EXPLANATION: &str = "I've tweaked the content. Let me know if you need specific changes like 'shorter' or 'add points'.";

/// Emoji removed outright by the professional operator, with any spaces after them.
static INFORMAL_EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:🧵|👇|🔥|🚀|✨|🤯|🛑)[ \t]*").unwrap());

/// Informal wording and its formal replacement, matched case-insensitively.
static FORMAL_SUBSTITUTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(?i)insane").unwrap(), "significant"),
        (Regex::new(r"(?i)crazy").unwrap(), "substantial"),
        (Regex::new(r"(?i)gonna").unwrap(), "going to"),
        (Regex::new(r"(?i)wanna").unwrap(), "want to"),
    ]
});

// =============================================================================
// DISPATCH
// =============================================================================

/// Apply the operator bound to `intent`.
#[must_use]
pub fn apply(intent: Intent, content: &str, structure: &Structure) -> RefinementResult {
    match intent {
        Intent::WordCountTarget { target } => word_count_target(content, structure, target),
        Intent::Expand => expand(content, structure),
        Intent::AddPoints => add_points(content, structure),
        Intent::Shorten => shorten(content, structure),
        Intent::Hook => hook(content, structure),
        Intent::Professional => professional(content),
        Intent::Casual => casual(structure),
        Intent::Fallback => fallback(content),
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Move the draft toward `target` words by padding or truncating.
#[must_use]
pub fn word_count_target(content: &str, structure: &Structure, target: usize) -> RefinementResult {
    if target > word_count(content) {
        let paragraphs = &structure.paragraphs;
        let content = if paragraphs.len() >= 2 {
            insert_paragraph(paragraphs, paragraphs.len().div_ceil(2), WORD_TARGET_FILLER)
        } else {
            append_block(content, WORD_TARGET_FILLER)
        };
        return RefinementResult::new(
            content,
            format!("I've expanded the text body to get closer to your {target} word target."),
        );
    }

    let tokens: Vec<&str> = content.split_whitespace().collect();
    let tags = tokens.iter().copied().filter(|t| is_hashtag(t)).join(" ");
    let mut body = tokens
        .iter()
        .copied()
        .take(target)
        .filter(|t| !is_hashtag(t))
        .join(" ");
    if !body.ends_with('.') {
        body.push_str("...");
    }
    if !tags.is_empty() {
        body.push_str("\n\n");
        body.push_str(&tags);
    }

    RefinementResult::new(
        body,
        format!(
            "I've trimmed the content down to approximately {target} words while keeping your tags."
        ),
    )
}

/// Add an elaboration block ahead of the closing paragraph.
#[must_use]
pub fn expand(content: &str, structure: &Structure) -> RefinementResult {
    let paragraphs = &structure.paragraphs;
    let content = if paragraphs.len() >= 2 {
        insert_paragraph(paragraphs, paragraphs.len() - 1, ELABORATION_BLOCK)
    } else {
        append_block(content, ELABORATION_BLOCK)
    };
    RefinementResult::new(content, EXPANDED_EXPLANATION)
}

/// Append two numbered points, continuing an existing list when there is one.
#[must_use]
pub fn add_points(content: &str, structure: &Structure) -> RefinementResult {
    let next = structure.next_ordinal();
    let points = NEW_POINTS
        .iter()
        .zip(next..)
        .map(|(text, ordinal)| format!("{ordinal}. {text}"))
        .collect::<Vec<_>>();

    if let Some(last) = structure.last_list_line() {
        let lines = &structure.lines;
        let content = lines[..=last]
            .iter()
            .chain(points.iter())
            .chain(lines[last + 1..].iter())
            .join("\n");
        return RefinementResult::new(content, POINTS_MERGED_EXPLANATION);
    }

    let points = points.join("\n");
    let anchor = structure
        .hashtag_block_start
        .or(structure.sign_off_line);

    let content = match anchor {
        Some(split_at) => {
            let head = structure.lines[..split_at].join("\n");
            let tail = structure.lines[split_at..].join("\n");
            join_blocks(&[head.trim(), points.as_str(), tail.trim()])
        }
        None => append_block(content, &format!("{KEY_POINTS_HEADER}\n{points}")),
    };
    RefinementResult::new(content, POINTS_ADDED_EXPLANATION)
}

/// Keep the hook, the middle insight and the closing line.
///
/// A trailing hashtag block counts as one closing line, so every tag line
/// survives even when the block spans several lines.
#[must_use]
pub fn shorten(content: &str, structure: &Structure) -> RefinementResult {
    let lines = &structure.lines;
    let block_start = structure.hashtag_block_start.unwrap_or(lines.len());
    let tags = non_blank(&lines[block_start..]).join("\n");

    let mut kept = non_blank(&lines[..block_start]);
    if !tags.is_empty() {
        kept.push(&tags);
    }

    if kept.len() <= 3 {
        return RefinementResult::new(content, SHORTENED_EXPLANATION);
    }

    let content = [kept[0], kept[kept.len() / 2], kept[kept.len() - 1]].join("\n\n");
    RefinementResult::new(content, SHORTENED_EXPLANATION)
}

/// Swap the first non-blank line for an attention-grabbing opener.
#[must_use]
pub fn hook(content: &str, structure: &Structure) -> RefinementResult {
    let first = structure
        .lines
        .iter()
        .position(|line| !line.trim().is_empty());

    let content = match first {
        Some(idx) => structure
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| if i == idx { HOOK_OPENER } else { line.as_str() })
            .join("\n"),
        None => format!("{HOOK_OPENER}\n\n{content}"),
    };
    RefinementResult::new(content, HOOK_EXPLANATION)
}

/// Strip informal emoji and wording.
#[must_use]
pub fn professional(content: &str) -> RefinementResult {
    let mut text = INFORMAL_EMOJI.replace_all(content, "").into_owned();
    text = text.replace('✅', "-");
    for (pattern, replacement) in FORMAL_SUBSTITUTIONS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let text = text.split('\n').map(str::trim_end).join("\n");
    RefinementResult::new(text, PROFESSIONAL_EXPLANATION)
}

/// Add emoji emphasis to the first line and after each sentence.
#[must_use]
pub fn casual(structure: &Structure) -> RefinementResult {
    let first = structure.lines.first().map_or("", String::as_str);
    let first = if first.contains(CASUAL_FIRST_LINE_EMOJI) {
        first.to_string()
    } else if first.trim().is_empty() {
        CASUAL_FIRST_LINE_EMOJI.to_string()
    } else {
        format!("{first} {CASUAL_FIRST_LINE_EMOJI}")
    };

    let text = std::iter::once(first.as_str())
        .chain(structure.lines.iter().skip(1).map(String::as_str))
        .join("\n")
        .replace(". ✨ ", ". ")
        .replace(". ", ". ✨ ");
    RefinementResult::new(text, CASUAL_EXPLANATION)
}

/// Prepend a revision header to the unchanged draft.
#[must_use]
pub fn fallback(content: &str) -> RefinementResult {
    RefinementResult::new(format!("{FALLBACK_HEADER}\n\n{content}"), FALLBACK_EXPLANATION)
}

// =============================================================================
// HELPERS
// =============================================================================

fn insert_paragraph(paragraphs: &[String], at: usize, block: &str) -> String {
    paragraphs[..at]
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(block))
        .chain(paragraphs[at..].iter().map(String::as_str))
        .join("\n\n")
}

fn append_block(content: &str, block: &str) -> String {
    if content.trim().is_empty() {
        block.to_string()
    } else {
        format!("{content}\n\n{block}")
    }
}

fn non_blank(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn join_blocks(blocks: &[&str]) -> String {
    blocks.iter().filter(|b| !b.is_empty()).join("\n\n")
}
