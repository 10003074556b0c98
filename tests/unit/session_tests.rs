//! Sessions built from generated drafts.

use hookline::draft::{SourceItem, generate_draft};
use hookline::session::{Role, Session};
use hookline::{HookError, Platform, Refiner};
use tempfile::tempdir;

fn reddit_item() -> SourceItem {
    SourceItem::from_json(
        r#"{
            "type": "reddit",
            "id": "r-42",
            "title": "Local models are catching up",
            "source_name": "r/LocalLLaMA",
            "snippet": "Open weights now match last year's frontier."
        }"#,
    )
    .unwrap()
}

#[test]
fn session_from_twitter_draft_continues_its_list() {
    let draft = generate_draft(&reddit_item(), Platform::Twitter);
    let mut session = Session::from_draft(&draft);
    assert_eq!(session.original_item_id.as_deref(), Some("r-42"));

    let result = session
        .apply(&Refiner::default(), "add 2 more points", 500)
        .unwrap();
    assert!(result.content.contains("4. Consistency"));
    assert!(result.content.contains("5. Leverage"));
    assert!(session.content.ends_with("#rLocalLLaMA #Growth"));
}

#[test]
fn conversation_log_alternates() {
    let draft = generate_draft(&reddit_item(), Platform::Email);
    let mut session = Session::from_draft(&draft);
    let refiner = Refiner::default();
    for instruction in ["make it longer", "more professional", "shorter"] {
        session.apply(&refiner, instruction, 500).unwrap();
    }

    assert_eq!(session.refinement_count(), 3);
    assert_eq!(session.turns.len(), 7);
    for (i, turn) in session.turns.iter().enumerate() {
        let expected = if i % 2 == 0 { Role::Assistant } else { Role::User };
        assert_eq!(turn.role, expected, "turn {i}");
    }
    assert!(session.updated_at >= session.created_at);
}

#[test]
fn rejected_instruction_leaves_session_untouched() {
    let mut session = Session::new("Draft", Platform::Blog);
    let before = session.clone();
    let err = session
        .apply(&Refiner::default(), &"y".repeat(501), 500)
        .unwrap_err();
    assert!(matches!(err, HookError::InstructionTooLong { len: 501, max: 500 }));
    assert_eq!(session, before);
}

#[test]
fn corrupt_session_file_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = Session::load(&path).unwrap_err();
    assert!(matches!(err, HookError::Serialization(_)));
}
