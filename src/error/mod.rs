//! Error handling for hookline.
//!
//! This module provides:
//! - [`HookError`]: The main error enum for all hookline operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context
//!
//! The refinement core itself never fails; these errors come from the
//! layers around it (input, config, sessions, drafts).

mod codes;

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for hookline operations.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Instruction is empty")]
    EmptyInstruction,

    #[error("Instruction is {len} characters, limit is {max}")]
    InstructionTooLong { len: usize, max: usize },

    #[error("Invalid source item: {0}")]
    InvalidSourceItem(String),

    #[error("Session not found: {}", .0.display())]
    SessionNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl HookError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Serialization(_) => ErrorCode::SerializationError,
            Self::InvalidInput(_) => ErrorCode::InputInvalid,
            Self::EmptyInstruction => ErrorCode::InstructionEmpty,
            Self::InstructionTooLong { .. } => ErrorCode::InstructionTooLong,
            Self::InvalidSourceItem(_) => ErrorCode::SourceItemInvalid,
            Self::SessionNotFound(_) => ErrorCode::SessionNotFound,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Runtime(_) => ErrorCode::RuntimeError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::InstructionTooLong { len, max } => {
                Some(serde_json::json!({ "length": len, "max": max }))
            }
            Self::SessionNotFound(path) => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_hook_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "INSTRUCTION_EMPTY")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 102)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "input", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`HookError`].
    #[must_use]
    pub fn from_hook_error(err: &HookError) -> Self {
        Self {
            context: err.context(),
            ..Self::new(err.code(), err.to_string())
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&HookError> for StructuredError {
    fn from(err: &HookError) -> Self {
        Self::from_hook_error(err)
    }
}

/// Result type alias using [`HookError`].
pub type Result<T> = std::result::Result<T, HookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_error_code_mapping() {
        assert_eq!(HookError::EmptyInstruction.code(), ErrorCode::InstructionEmpty);
        assert_eq!(
            HookError::Config("bad".into()).code(),
            ErrorCode::ConfigInvalid
        );
        assert_eq!(
            HookError::InstructionTooLong { len: 10, max: 5 }.code(),
            ErrorCode::InstructionTooLong
        );
    }

    #[test]
    fn test_structured_error_carries_context() {
        let err = HookError::InstructionTooLong { len: 900, max: 500 };
        let structured = err.to_structured();
        assert_eq!(structured.numeric_code, 103);
        assert_eq!(structured.category, "input");
        assert!(structured.recoverable);
        let context = structured.context.unwrap();
        assert_eq!(context["length"], 900);
        assert_eq!(context["max"], 500);
    }

    #[test]
    fn test_structured_error_display() {
        let structured = StructuredError::new(ErrorCode::InputInvalid, "no draft");
        assert_eq!(structured.to_string(), "[E101] no draft");
    }

    #[test]
    fn test_io_error_converts() {
        let err: HookError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), ErrorCode::IoError);
        assert!(err.to_string().contains("gone"));
    }
}
