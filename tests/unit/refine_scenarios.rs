//! End-to-end refinement scenarios through the public API.

use hookline::refine::operators::{FALLBACK_HEADER, HOOK_OPENER};
use hookline::refine::structure::word_count;
use hookline::{Platform, Refiner, refine};

const LINKEDIN_DRAFT: &str = "LLAMA 3 IS INSANE FOR CODING\n\nI recently came across this insight from r/LocalLLaMA, and it completely changed my perspective.\n\nHere are 3 ways to apply this today:\n\n1. Step 1\n2. Step 2\n3. Step 3\n\nWhat are your thoughts? 👇\n\n#Business #Strategy #Innovation";

const EMAIL_DRAFT: &str = "Subject: Quick thought on agents\n\nHey,\n\nI saw this piece and thought of you.\n\nBest,\n[Your Name]";

fn non_blank(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

#[test]
fn truncates_to_three_words() {
    let result = refine(
        "Hello world. This is a draft. Thanks.",
        "make it 3 words",
        Platform::Twitter,
    );
    assert!(result.content.starts_with("Hello world. This"));
    assert!(result.content.ends_with("..."));
    assert!(result.explanation.contains("3 words"));
}

#[test]
fn shorter_keeps_hook_middle_and_close() {
    let result = refine("L0\nL1\nL2\nL3\nL4", "make it shorter", Platform::Twitter);
    assert_eq!(non_blank(&result.content), vec!["L0", "L2", "L4"]);
}

#[test]
fn shorter_keeps_trailing_hashtags() {
    let result = refine(LINKEDIN_DRAFT, "more concise please", Platform::Linkedin);
    let lines = non_blank(&result.content);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "LLAMA 3 IS INSANE FOR CODING");
    assert_eq!(lines[2], "#Business #Strategy #Innovation");
}

#[test]
fn add_points_continues_numbering() {
    let result = refine(LINKEDIN_DRAFT, "add 2 more points", Platform::Linkedin);
    let lines: Vec<&str> = result.content.lines().collect();
    let third = lines.iter().position(|l| *l == "3. Step 3").unwrap();
    assert!(lines[third + 1].starts_with("4. "));
    assert!(lines[third + 2].starts_with("5. "));
    assert!(result.content.ends_with("#Innovation"));
}

#[test]
fn add_points_lands_before_email_sign_off() {
    let result = refine(EMAIL_DRAFT, "add some tips", Platform::Email);
    let tip = result.content.find("1. Consistency").unwrap();
    let sign_off = result.content.find("Best,").unwrap();
    assert!(tip < sign_off);
    assert!(result.content.ends_with("Best,\n[Your Name]"));
}

#[test]
fn expand_to_word_target_grows_the_draft() {
    let result = refine(EMAIL_DRAFT, "expand to 400 words", Platform::Blog);
    assert!(word_count(&result.content) > word_count(EMAIL_DRAFT));
    assert!(result.explanation.contains("400 word target"));
}

#[test]
fn longer_inserts_before_closing_paragraph() {
    let result = refine(EMAIL_DRAFT, "make it longer", Platform::Email);
    let elaboration = result.content.find("To elaborate further").unwrap();
    let close = result.content.find("Best,").unwrap();
    assert!(elaboration < close);
}

#[test]
fn hook_replaces_opening_line() {
    let result = refine(LINKEDIN_DRAFT, "better hook", Platform::Linkedin);
    assert!(result.content.starts_with(HOOK_OPENER));
    assert!(!result.content.contains("LLAMA 3 IS INSANE"));
}

#[test]
fn professional_then_casual() {
    let formal = refine(LINKEDIN_DRAFT, "more professional", Platform::Linkedin);
    assert!(!formal.content.contains("👇"));
    assert!(formal.content.starts_with("LLAMA 3 IS significant FOR CODING"));

    let casual = refine(&formal.content, "make it fun", Platform::Linkedin);
    assert!(casual.content.lines().next().unwrap().ends_with("🤯"));
}

#[test]
fn unknown_instruction_gets_header() {
    let result = refine("Draft body", "translate to french", Platform::Twitter);
    assert_eq!(result.content, format!("{FALLBACK_HEADER}\n\nDraft body"));
}

#[test]
fn empty_content_never_fails() {
    let result = refine("", "please help", Platform::Twitter);
    assert_eq!(result.content, format!("{FALLBACK_HEADER}\n\n"));
    assert!(!result.explanation.is_empty());
}

#[test]
fn platform_does_not_change_the_transformation() {
    let outputs: Vec<String> = Platform::ALL
        .into_iter()
        .map(|platform| refine(LINKEDIN_DRAFT, "add a tip", platform).content)
        .collect();
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn revision_markers_are_removed_before_refining() {
    let refiner = Refiner::default();
    let marked = format!("{EMAIL_DRAFT}\n\n[Revised based on feedback: shorter]");
    let result = refiner.refine(&marked, "add tips", Platform::Email);
    assert!(!result.content.contains("Revised based on feedback"));
}

#[test]
fn refinements_chain() {
    let mut content = LINKEDIN_DRAFT.to_string();
    for instruction in ["add points", "add more points", "more professional", "shorter"] {
        content = refine(&content, instruction, Platform::Linkedin).content;
    }
    assert_eq!(non_blank(&content).len(), 3);
    assert!(content.ends_with("#Business #Strategy #Innovation"));
}
