//! Agent registration use-case service.
//!
//! # Responsibility
//! - Provide stable registration entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Identifier generation is injected, never ambient, so callers can run
//!   deterministic fakes.

use crate::model::agent::Agent;
use crate::repo::agent_repo::{AgentRepository, RepoResult};
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces external identifiers for newly registered agents.
pub trait IdentifierFactory {
    fn identifier(&self, name: &str) -> String;
}

/// Default factory: `<name>-<epoch-millis>`.
///
/// Collisions require two same-named registrations within one millisecond;
/// callers needing stronger guarantees inject their own factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdentifierFactory;

impl IdentifierFactory for TimestampIdentifierFactory {
    fn identifier(&self, name: &str) -> String {
        let epoch_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        format!("{name}-{epoch_ms}")
    }
}

/// Use-case wrapper over an agent repository.
pub struct AgentService<R: AgentRepository, F: IdentifierFactory> {
    repo: R,
    identifiers: F,
}

impl<R: AgentRepository> AgentService<R, TimestampIdentifierFactory> {
    /// Creates a service with the default timestamp identifier scheme.
    pub fn new(repo: R) -> Self {
        Self::with_identifier_factory(repo, TimestampIdentifierFactory)
    }
}

impl<R: AgentRepository, F: IdentifierFactory> AgentService<R, F> {
    /// Creates a service with an injected identifier factory.
    pub fn with_identifier_factory(repo: R, identifiers: F) -> Self {
        Self { repo, identifiers }
    }

    /// Registers a new agent: generates an identifier, assigns a sequence
    /// id, and persists the record.
    ///
    /// Returns the persisted agent value. A store-rejected write surfaces
    /// as `Ok(None)` so callers can distinguish it from transport errors.
    pub fn register(&self, name: &str, tags: Vec<String>) -> RepoResult<Option<Agent>> {
        let mut agent = Agent::new(self.identifiers.identifier(name), name);
        agent.tags = tags;
        let created = self.repo.create(&agent)?;
        if self.repo.save(&created)? {
            Ok(Some(created))
        } else {
            Ok(None)
        }
    }

    /// Persists the current field values of an already-registered agent.
    pub fn save(&self, agent: &Agent) -> RepoResult<bool> {
        self.repo.save(agent)
    }

    /// Removes the persisted record for this agent.
    pub fn remove(&self, agent: &Agent) -> RepoResult<bool> {
        self.repo.delete(agent)
    }

    /// Lists every registered agent.
    pub fn list(&self) -> RepoResult<Vec<Agent>> {
        self.repo.get_all()
    }

    /// Counts registered agents.
    pub fn count(&self) -> RepoResult<usize> {
        self.repo.count()
    }
}
