//! Refinement sessions.
//!
//! A session owns one evolving draft and the conversation around it: every
//! instruction is logged as a user turn, every explanation as an assistant
//! turn, and each refinement feeds on the previous output. Sessions persist
//! as pretty-printed JSON so the CLI can continue them across invocations.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::draft::Draft;
use crate::error::{HookError, Result};
use crate::refine::{Platform, RefinementResult, Refiner, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_item_id: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub turns: Vec<Turn>,
}

impl Session {
    /// Start a session on `content`, opening with the draft greeting.
    #[must_use]
    pub fn new(content: impl Into<String>, platform: Platform) -> Self {
        let now = Utc::now();
        let mut session = Self {
            id: Uuid::new_v4(),
            platform,
            original_item_id: None,
            content: content.into(),
            created_at: now,
            updated_at: now,
            turns: Vec::new(),
        };
        session.push(
            Role::Assistant,
            format!("I've drafted a {platform} post for you. What do you think?"),
        );
        session
    }

    #[must_use]
    pub fn from_draft(draft: &Draft) -> Self {
        let mut session = Self::new(draft.content.clone(), draft.platform);
        session.original_item_id = Some(draft.original_item_id.clone());
        session
    }

    /// Reject instructions the refinement layer should never see.
    pub fn validate_instruction(instruction: &str, max_chars: usize) -> Result<()> {
        if instruction.trim().is_empty() {
            return Err(HookError::EmptyInstruction);
        }
        let len = instruction.chars().count();
        if max_chars > 0 && len > max_chars {
            return Err(HookError::InstructionTooLong { len, max: max_chars });
        }
        Ok(())
    }

    /// Validate, refine the current draft, and log both sides of the exchange.
    pub fn apply(
        &mut self,
        refiner: &Refiner,
        instruction: &str,
        max_chars: usize,
    ) -> Result<RefinementResult> {
        Self::validate_instruction(instruction, max_chars)?;
        let result = refiner.refine(&self.content, instruction, self.platform);
        self.record(instruction, &result);
        Ok(result)
    }

    /// Log an exchange whose result was computed elsewhere.
    pub fn record(&mut self, instruction: &str, result: &RefinementResult) {
        debug!(
            session = %self.id,
            intent = %classify(&instruction.to_lowercase()),
            "recording refinement"
        );
        self.push(Role::User, instruction.to_string());
        self.push(Role::Assistant, result.explanation.clone());
        self.content.clone_from(&result.content);
    }

    /// Number of refinements applied so far.
    #[must_use]
    pub fn refinement_count(&self) -> usize {
        self.turns.iter().filter(|t| t.role == Role::User).count()
    }

    fn push(&mut self, role: Role, text: String) {
        let at = Utc::now();
        self.turns.push(Turn { role, text, at });
        self.updated_at = at;
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        info!(session = %self.id, path = %path.display(), "saved session");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HookError::SessionNotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|err| {
            HookError::Serialization(format!("parse session {}: {err}", path.display()))
        })
    }
}
