//! Property-based tests for refinement - totality, ordering and preservation.

use proptest::prelude::*;

use hookline::refine::structure::{analyze, word_count};
use hookline::refine::{Intent, classify};
use hookline::{Platform, refine};

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Twitter),
        Just(Platform::Linkedin),
        Just(Platform::Email),
        Just(Platform::Blog),
    ]
}

fn arb_instruction() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("make it shorter".to_string()),
        Just("make it longer".to_string()),
        Just("add 2 more points".to_string()),
        Just("add more".to_string()),
        Just("new hook".to_string()),
        Just("more professional".to_string()),
        Just("more casual".to_string()),
        (0usize..400).prop_map(|n| format!("make it {n} words")),
        ".{0,40}",
    ]
}

/// Plain sentences with no hashtags.
fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..60)
}

fn non_hashtag_tokens(text: &str) -> usize {
    text.split_whitespace().filter(|t| !t.starts_with('#')).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn refine_never_panics(
        content in "(?s).{0,300}",
        instruction in arb_instruction(),
        platform in arb_platform(),
    ) {
        let result = refine(&content, &instruction, platform);
        prop_assert!(!result.explanation.is_empty());
    }

    #[test]
    fn analyze_never_panics(content in "(?s).{0,300}") {
        let structure = analyze(&content);
        prop_assert_eq!(structure.lines.len(), content.split('\n').count());
        for item in &structure.list_items {
            prop_assert!(item.line_index < structure.lines.len());
        }
    }

    #[test]
    fn classification_is_deterministic(instruction in ".{0,60}") {
        let lower = instruction.to_lowercase();
        prop_assert_eq!(classify(&lower), classify(&lower));
    }

    #[test]
    fn instruction_case_does_not_matter(
        content in "[A-Za-z .#\n]{0,120}",
        instruction in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let lower = refine(&content, &instruction.to_lowercase(), Platform::Twitter);
        let upper = refine(&content, &instruction.to_uppercase(), Platform::Twitter);
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn word_target_expansion_adds_words(words in arb_words(), extra in 1usize..200) {
        let content = words.join(" ");
        let current = word_count(&content);
        let target = current + extra;
        let result = refine(&content, &format!("make it {target} words"), Platform::Blog);
        prop_assert!(word_count(&result.content) > current);
    }

    #[test]
    fn word_target_truncation_hits_target(words in arb_words(), cut in 1usize..60) {
        let content = words.join(" ");
        let current = word_count(&content);
        let target = cut.min(current);
        let result = refine(&content, &format!("make it {target} words"), Platform::Blog);
        prop_assert_eq!(word_count(&result.content), target);
    }

    #[test]
    fn truncation_keeps_every_hashtag(
        words in arb_words(),
        tags in prop::collection::vec("#[A-Za-z]{1,10}", 1..5),
        target in 0usize..20,
    ) {
        let content = format!("{}\n\n{}", words.join(" "), tags.join(" "));
        prop_assume!(target <= word_count(&content));

        let result = refine(&content, &format!("cut to {target} words"), Platform::Twitter);
        for tag in &tags {
            prop_assert!(result.content.contains(tag.as_str()), "lost {}", tag);
        }
        prop_assert!(non_hashtag_tokens(&result.content) <= target.max(1));
    }

    #[test]
    fn add_points_continues_any_list(
        count in 1u64..12,
        intro in "[A-Za-z][a-z ]{0,20}",
        outro in "[A-Za-z][a-z ]{0,20}",
    ) {
        let items: Vec<String> = (1..=count).map(|n| format!("{n}. item {n}")).collect();
        let content = format!("{}\n{}\n\n{}", intro.trim(), items.join("\n"), outro.trim());

        let result = refine(&content, "add 2 more points", Platform::Linkedin);
        let lines: Vec<&str> = result.content.lines().collect();
        let last = lines
            .iter()
            .position(|line| *line == format!("{count}. item {count}"))
            .unwrap();
        let next = format!("{}. ", count + 1);
        let after = format!("{}. ", count + 2);
        prop_assert!(lines[last + 1].starts_with(&next));
        prop_assert!(lines[last + 2].starts_with(&after));
    }

    #[test]
    fn add_points_wins_over_add_more(filler in "[a-z ]{0,10}") {
        let instruction = format!("add {filler} more points");
        prop_assume!(!instruction.contains("word"));
        prop_assume!(!["longer", "expand", "detail"].iter().any(|k| instruction.contains(k)));
        prop_assert_eq!(classify(&instruction), Intent::AddPoints);
    }
}
