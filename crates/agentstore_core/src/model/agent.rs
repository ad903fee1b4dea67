//! Agent domain model.
//!
//! # Responsibility
//! - Define the agent record persisted by the repository layer.
//! - Provide construction paths for fresh and externally-sourced identity.
//!
//! # Invariants
//! - `id` stays `None` until a repository assigns it; the repository is the
//!   only writer of this field.
//! - `identifier` is non-empty and acts as the storage key.
//! - `correlation_id` is never nil and never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Repository-assigned sequence id.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AgentId = u64;

/// Registered agent record.
///
/// Value-like: the repository hands out copies and does not track object
/// identity beyond the storage key. A handle held by a caller stays valid
/// in memory after the persisted record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Sequence id assigned on `create`; `None` before first registration.
    pub id: Option<AgentId>,
    /// Caller-supplied external unique token; the storage key.
    pub identifier: String,
    /// Stable correlation id generated at construction time.
    pub correlation_id: Uuid,
    /// Human-readable label; mutable by the owner, ignored by persistence.
    pub name: String,
    /// Ordered caller-supplied tags.
    pub tags: Vec<String>,
}

impl Agent {
    /// Creates an agent with a fresh correlation id and no tags.
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            identifier: identifier.into(),
            correlation_id: Uuid::new_v4(),
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Creates an agent whose identity already exists externally.
    ///
    /// Used by import and test paths. Rejects identity values that could
    /// never have been produced by `new`.
    pub fn with_correlation_id(
        identifier: impl Into<String>,
        correlation_id: Uuid,
        name: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self, AgentValidationError> {
        let agent = Self {
            id: None,
            identifier: identifier.into(),
            correlation_id,
            name: name.into(),
            tags,
        };
        agent.validate()?;
        Ok(agent)
    }

    /// Checks identity invariants; called by every repository write path.
    pub fn validate(&self) -> Result<(), AgentValidationError> {
        if self.identifier.trim().is_empty() {
            return Err(AgentValidationError::EmptyIdentifier);
        }
        if self.correlation_id.is_nil() {
            return Err(AgentValidationError::NilCorrelationId);
        }
        Ok(())
    }

    /// Returns whether a repository has assigned a sequence id yet.
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Appends a tag, preserving insertion order.
    pub fn tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}

/// Identity rule violations detected before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentValidationError {
    EmptyIdentifier,
    NilCorrelationId,
}

impl Display for AgentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyIdentifier => write!(f, "agent identifier must not be empty"),
            Self::NilCorrelationId => write!(f, "agent correlation id must not be nil"),
        }
    }
}

impl Error for AgentValidationError {}
