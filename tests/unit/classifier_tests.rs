//! Decision-list ordering, one rule at a time.

use hookline::refine::intent::{FALLBACK_RULE, RULES};
use hookline::refine::{Intent, classify, classify_with_rule};

#[test]
fn rule_table_order() {
    let names: Vec<&str> = RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(
        names,
        vec![
            "word_count_target",
            "expand",
            "add_points",
            "add_more",
            "shorten",
            "hook",
            "professional",
            "casual",
        ]
    );
}

#[test]
fn each_rule_matches_its_keywords() {
    let cases = [
        ("keep it under 40 words", Intent::WordCountTarget { target: 40 }),
        ("go into more detail", Intent::Expand),
        ("add another step", Intent::AddPoints),
        ("add more substance", Intent::Expand),
        ("cut the fluff", Intent::Shorten),
        ("punchier opener", Intent::Hook),
        ("corporate tone", Intent::Professional),
        ("make it go viral", Intent::Casual),
        ("rewrite in spanish", Intent::Fallback),
    ];
    for (instruction, expected) in cases {
        assert_eq!(classify(instruction), expected, "{instruction}");
    }
}

#[test]
fn add_points_beats_add_more() {
    assert_eq!(
        classify_with_rule("add 2 more points"),
        (Intent::AddPoints, "add_points")
    );
    assert_eq!(
        classify_with_rule("add more"),
        (Intent::Expand, "add_more")
    );
}

#[test]
fn earlier_rules_shadow_later_ones() {
    // "shorter" and "hook" both appear; shorten is checked first.
    assert_eq!(classify("shorter hook"), Intent::Shorten);
    // "start" (hook) and "formal" (professional) both appear.
    assert_eq!(classify("start more formal"), Intent::Hook);
}

#[test]
fn fallback_reports_its_rule() {
    assert_eq!(classify_with_rule(""), (Intent::Fallback, FALLBACK_RULE));
}

#[test]
fn classification_expects_lowercase_input() {
    assert_eq!(classify("SHORTER"), Intent::Fallback);
    assert_eq!(classify(&"SHORTER".to_lowercase()), Intent::Shorten);
}
