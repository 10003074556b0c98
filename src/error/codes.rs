//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Input errors
//! - 2xx: Draft errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `InstructionEmpty` -> E102).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Input errors (1xx)
    // ========================================
    /// E101: Argument or file contents could not be used
    InputInvalid,
    /// E102: Instruction was blank
    InstructionEmpty,
    /// E103: Instruction exceeded the configured length limit
    InstructionTooLong,

    // ========================================
    // Draft errors (2xx)
    // ========================================
    /// E201: Source item JSON did not describe a reddit or newsletter item
    SourceItemInvalid,
    /// E202: Session file does not exist
    SessionNotFound,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E605: Data could not be (de)serialized
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Async runtime failed to start
    RuntimeError,
    /// E906: File operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric code (e.g., 101 for `InputInvalid`).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InputInvalid => 101,
            Self::InstructionEmpty => 102,
            Self::InstructionTooLong => 103,

            Self::SourceItemInvalid => 201,
            Self::SessionNotFound => 202,

            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::SerializationError => 605,

            Self::RuntimeError => 901,
            Self::IoError => 906,
        }
    }

    /// Get the code string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get an actionable suggestion for resolving this error.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InputInvalid => "Check the arguments. Pass draft text with --content, --file, or on stdin",
            Self::InstructionEmpty => "Describe the change you want, e.g. `-i \"make it shorter\"`",
            Self::InstructionTooLong => "Shorten the instruction or raise refine.max_instruction_chars in config",

            Self::SourceItemInvalid => "The item must be JSON with \"type\": \"reddit\" or \"newsletter\"",
            Self::SessionNotFound => "Create a session first with `hookline session new <file>`",

            Self::ConfigInvalid => "Run `hookline config` to see current values. Check TOML syntax in config file",
            Self::ConfigMissingRequired => "Set the required value in config.toml or via HOOKLINE_* environment variables",

            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::RuntimeError => "An unexpected error occurred. Please report this issue with full error output",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Whether the user can fix this by changing input or config.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::RuntimeError)
    }

    /// Get the category name for this error code.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            2 => "draft",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::InputInvalid,
            Self::InstructionEmpty,
            Self::InstructionTooLong,
            Self::SourceItemInvalid,
            Self::SessionNotFound,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::SerializationError,
            Self::RuntimeError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
