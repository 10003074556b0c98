//! Text structure analysis for drafts.
//!
//! Extracts the pieces of a draft the operators care about: paragraphs,
//! numbered list items, the trailing hashtag block and an email-style
//! sign-off. Absence of a feature is an empty result, never an error.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// =============================================================================
// PATTERNS
// =============================================================================

/// Blank-line boundary: a newline, optional horizontal whitespace, then any
/// further blank lines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").unwrap());

/// Numbered item prefix: "1." or "12." at the start of a trimmed line.
static ORDINAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.").unwrap());

/// Closing salutation occupying a whole line.
static SIGN_OFF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:sincerely|best|best regards|kind regards|warm regards|regards|cheers|thanks|thank you|all the best)[,.!]?$",
    )
    .unwrap()
});

// =============================================================================
// TYPES
// =============================================================================

/// A numbered list line found in the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Index into [`Structure::lines`].
    pub line_index: usize,
    /// The parsed number before the dot.
    pub ordinal: u64,
}

/// Structural findings for one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Structure {
    pub paragraphs: Vec<String>,
    pub lines: Vec<String>,
    pub list_items: Vec<ListItem>,
    /// Tokens of the trailing hashtag block, in document order.
    pub hashtags: Vec<String>,
    /// First line of the trailing hashtag block.
    pub hashtag_block_start: Option<usize>,
    /// Last line holding a closing salutation.
    pub sign_off_line: Option<usize>,
}

impl Structure {
    #[must_use]
    pub const fn has_sign_off(&self) -> bool {
        self.sign_off_line.is_some()
    }

    #[must_use]
    pub fn has_list(&self) -> bool {
        !self.list_items.is_empty()
    }

    /// Line index of the last numbered item.
    #[must_use]
    pub fn last_list_line(&self) -> Option<usize> {
        self.list_items.last().map(|item| item.line_index)
    }

    /// Next free ordinal: one past the highest existing ordinal, or 1.
    #[must_use]
    pub fn next_ordinal(&self) -> u64 {
        self.list_items
            .iter()
            .map(|item| item.ordinal.saturating_add(1))
            .max()
            .unwrap_or(1)
            .max(1)
    }
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Analyze a draft.
#[must_use]
pub fn analyze(content: &str) -> Structure {
    let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    let (hashtag_block_start, hashtags) = trailing_hashtag_block(&lines);

    Structure {
        paragraphs: split_paragraphs(content),
        list_items: find_list_items(&lines),
        sign_off_line: find_sign_off(&lines),
        hashtag_block_start,
        hashtags,
        lines,
    }
}

/// Split content on blank-line boundaries, dropping empty paragraphs.
#[must_use]
pub fn split_paragraphs(content: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(content)
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Whitespace-separated token count.
#[must_use]
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Whether a token is a hashtag.
#[must_use]
pub fn is_hashtag(token: &str) -> bool {
    token.starts_with('#')
}

fn find_list_items(lines: &[String]) -> Vec<ListItem> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| {
            let caps = ORDINAL_PREFIX.captures(line.trim())?;
            // Ordinals too large to parse are not list items.
            let ordinal = caps[1].parse::<u64>().ok()?;
            Some(ListItem {
                line_index,
                ordinal,
            })
        })
        .collect()
}

fn is_hashtag_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(is_hashtag)
}

fn trailing_hashtag_block(lines: &[String]) -> (Option<usize>, Vec<String>) {
    let mut start = None;

    for (idx, line) in lines.iter().enumerate().rev() {
        if line.trim().is_empty() {
            continue;
        }
        if is_hashtag_line(line) {
            start = Some(idx);
        } else {
            break;
        }
    }

    let hashtags = start
        .map(|start| {
            lines[start..]
                .iter()
                .flat_map(|line| line.split_whitespace())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    (start, hashtags)
}

fn find_sign_off(lines: &[String]) -> Option<usize> {
    lines
        .iter()
        .rposition(|line| SIGN_OFF.is_match(&line.trim().to_lowercase()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let paragraphs = split_paragraphs("one\n\ntwo\nstill two\n \n\nthree");
        assert_eq!(paragraphs, vec!["one", "two\nstill two", "three"]);
    }

    #[test]
    fn test_paragraphs_empty_content() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n").is_empty());
    }

    #[test]
    fn test_list_items_with_ordinals() {
        let structure = analyze("Intro\n1. a\n  2. b\nnot 3. c\n10. d");
        let ordinals: Vec<_> = structure.list_items.iter().map(|i| i.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 10]);
        assert_eq!(structure.last_list_line(), Some(4));
        assert_eq!(structure.next_ordinal(), 11);
    }

    #[test]
    fn test_next_ordinal_defaults_to_one() {
        let structure = analyze("No list here.");
        assert!(!structure.has_list());
        assert_eq!(structure.next_ordinal(), 1);
    }

    #[test]
    fn test_overflowing_ordinal_is_not_a_list_item() {
        let structure = analyze("99999999999999999999999. huge");
        assert!(structure.list_items.is_empty());
    }

    #[test]
    fn test_trailing_hashtag_block() {
        let structure = analyze("Body text #inline\n\n#Growth #AI\n#More");
        assert_eq!(structure.hashtag_block_start, Some(2));
        assert_eq!(structure.hashtags, vec!["#Growth", "#AI", "#More"]);
    }

    #[test]
    fn test_inline_hashtag_is_not_a_block() {
        let structure = analyze("We are #1 at this.\nThanks for reading");
        assert_eq!(structure.hashtag_block_start, None);
        assert!(structure.hashtags.is_empty());
    }

    #[test]
    fn test_sign_off_detection() {
        let structure = analyze("Hey,\n\nBody.\n\nBest,\n[Your Name]");
        assert_eq!(structure.sign_off_line, Some(4));
        assert!(structure.has_sign_off());

        let structure = analyze("Sincerely\nJane");
        assert_eq!(structure.sign_off_line, Some(0));

        assert!(!analyze("Best of luck with the launch.").has_sign_off());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one two\n\nthree  "), 3);
    }
}
