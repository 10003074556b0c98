use std::path::PathBuf;

use insta::assert_snapshot;

use hookline::HookError;

#[test]
fn test_error_empty_instruction() {
    let err = HookError::EmptyInstruction;
    assert_snapshot!(err.to_string(), @"Instruction is empty");
    assert_snapshot!(err.to_structured().to_string(), @"[E102] Instruction is empty");
}

#[test]
fn test_error_instruction_too_long() {
    let err = HookError::InstructionTooLong { len: 612, max: 500 };
    assert_snapshot!(err.to_string(), @"Instruction is 612 characters, limit is 500");
}

#[test]
fn test_error_session_not_found() {
    let err = HookError::SessionNotFound(PathBuf::from("drafts/post.json"));
    assert_snapshot!(err.to_string(), @"Session not found: drafts/post.json");
}

#[test]
fn test_error_invalid_source_item() {
    let err = HookError::InvalidSourceItem("unknown variant `podcast`".to_string());
    assert_snapshot!(err.to_string(), @"Invalid source item: unknown variant `podcast`");
}

#[test]
fn test_structured_error_json() {
    let err = HookError::InstructionTooLong { len: 612, max: 500 };
    let json = serde_json::to_string_pretty(&err.to_structured()).unwrap();
    assert_snapshot!(json, @r#"
    {
      "code": "INSTRUCTION_TOO_LONG",
      "numeric_code": 103,
      "message": "Instruction is 612 characters, limit is 500",
      "suggestion": "Shorten the instruction or raise refine.max_instruction_chars in config",
      "context": {
        "length": 612,
        "max": 500
      },
      "recoverable": true,
      "category": "input"
    }
    "#);
}
