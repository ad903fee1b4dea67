//! Agent repository contract and key-value implementation.
//!
//! # Responsibility
//! - Provide create/save/delete/list/count over a key-value backend.
//! - Own the key layout (`<namespace>:<identifier>`) and the sequence id
//!   assignment policy.
//!
//! # Invariants
//! - `create` is local-only; the store is first touched by `save`.
//! - Sequence ids are unique per repository instance and never reused.
//! - Read paths reject corrupt persisted records instead of masking them.

use crate::codec::{AgentCodec, CodecError};
use crate::model::agent::{Agent, AgentId, AgentValidationError};
use crate::store::{KeyValueStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for agent persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(AgentValidationError),
    Connection(StoreError),
    Pattern(StoreError),
    Serialization { key: String, source: CodecError },
    IdAlreadyAssigned { id: AgentId },
    IdUnassigned { identifier: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Connection(err) => write!(f, "{err}"),
            Self::Pattern(err) => write!(f, "{err}"),
            Self::Serialization { key, source } => {
                write!(f, "bad record under `{key}`: {source}")
            }
            Self::IdAlreadyAssigned { id } => {
                write!(f, "agent already has sequence id {id} assigned")
            }
            Self::IdUnassigned { identifier } => {
                write!(f, "agent `{identifier}` has no sequence id; call create first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Connection(err) => Some(err),
            Self::Pattern(err) => Some(err),
            Self::Serialization { source, .. } => Some(source),
            Self::IdAlreadyAssigned { .. } => None,
            Self::IdUnassigned { .. } => None,
        }
    }
}

impl From<AgentValidationError> for RepoError {
    fn from(value: AgentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Connection { .. } => Self::Connection(value),
            StoreError::InvalidPattern { .. } => Self::Pattern(value),
        }
    }
}

/// Repository interface for agent persistence.
pub trait AgentRepository {
    /// Assigns a fresh sequence id and returns the updated agent value.
    ///
    /// Local-only: no store side effect. Fails when the agent already
    /// carries an id; re-registration is not silently absorbed.
    fn create(&self, agent: &Agent) -> RepoResult<Agent>;

    /// Upserts the agent record under its identifier key.
    ///
    /// `Ok(true)` when the store acknowledged the write, `Ok(false)` when
    /// the store rejected it. Connection loss raises.
    fn save(&self, agent: &Agent) -> RepoResult<bool>;

    /// Removes the persisted record for this agent.
    ///
    /// `Ok(true)` when a record existed and was removed, `Ok(false)` when
    /// no record matched. The in-memory handle stays valid either way.
    fn delete(&self, agent: &Agent) -> RepoResult<bool>;

    /// Loads every persisted agent in this repository's namespace.
    fn get_all(&self) -> RepoResult<Vec<Agent>>;

    /// Counts persisted agents; equals `get_all().len()` when no writer is
    /// active.
    fn count(&self) -> RepoResult<usize>;
}

/// Key-value backed agent repository.
pub struct KvAgentRepository<S: KeyValueStore, C: AgentCodec> {
    store: S,
    codec: C,
    namespace: String,
    next_id: AtomicU64,
}

impl<S: KeyValueStore, C: AgentCodec> KvAgentRepository<S, C> {
    /// Creates a repository scoped to `namespace` within the store.
    pub fn new(store: S, codec: C, namespace: impl Into<String>) -> Self {
        Self {
            store,
            codec,
            namespace: namespace.into(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a repository scoped by an externally-supplied configuration.
    ///
    /// The caller connects the store from the same config; the repository
    /// only consumes the namespace.
    pub fn from_config(store: S, codec: C, config: &crate::config::StoreConfig) -> Self {
        Self::new(store, codec, config.namespace.clone())
    }

    /// The key-prefix scope this repository operates under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn key_for(&self, identifier: &str) -> String {
        format!("{}:{}", self.namespace, identifier)
    }

    fn scan_pattern(&self) -> String {
        format!("{}:*", self.namespace)
    }
}

impl<S: KeyValueStore, C: AgentCodec> AgentRepository for KvAgentRepository<S, C> {
    fn create(&self, agent: &Agent) -> RepoResult<Agent> {
        agent.validate()?;
        if let Some(id) = agent.id {
            return Err(RepoError::IdAlreadyAssigned { id });
        }

        let mut created = agent.clone();
        created.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        Ok(created)
    }

    fn save(&self, agent: &Agent) -> RepoResult<bool> {
        let started_at = Instant::now();
        agent.validate()?;
        if !agent.has_id() {
            return Err(RepoError::IdUnassigned {
                identifier: agent.identifier.clone(),
            });
        }

        let key = self.key_for(&agent.identifier);
        let bytes = self
            .codec
            .encode(agent)
            .map_err(|source| RepoError::Serialization {
                key: key.clone(),
                source,
            })?;

        let acknowledged = self.store.set(&key, &bytes)?;
        if acknowledged {
            info!(
                "event=agent_save module=repo status=ok key={} duration_ms={}",
                key,
                started_at.elapsed().as_millis()
            );
        } else {
            warn!(
                "event=agent_save module=repo status=rejected key={} duration_ms={}",
                key,
                started_at.elapsed().as_millis()
            );
        }
        Ok(acknowledged)
    }

    fn delete(&self, agent: &Agent) -> RepoResult<bool> {
        let started_at = Instant::now();
        let key = self.key_for(&agent.identifier);
        let removed = self.store.del(&key)?;
        info!(
            "event=agent_delete module=repo status=ok key={} removed={} duration_ms={}",
            key,
            removed,
            started_at.elapsed().as_millis()
        );
        Ok(removed > 0)
    }

    fn get_all(&self) -> RepoResult<Vec<Agent>> {
        let started_at = Instant::now();
        let keys = self.store.keys(&self.scan_pattern())?;
        let mut agents = Vec::with_capacity(keys.len());

        for key in keys {
            // A key can vanish between KEYS and GET when a concurrent
            // delete wins the race; that is a miss, not corruption.
            let Some(bytes) = self.store.get(&key)? else {
                continue;
            };
            let agent = self
                .codec
                .decode(&bytes)
                .map_err(|source| RepoError::Serialization {
                    key: key.clone(),
                    source,
                })?;
            agents.push(agent);
        }

        info!(
            "event=agent_scan module=repo status=ok namespace={} loaded={} duration_ms={}",
            self.namespace,
            agents.len(),
            started_at.elapsed().as_millis()
        );
        Ok(agents)
    }

    fn count(&self) -> RepoResult<usize> {
        Ok(self.store.keys(&self.scan_pattern())?.len())
    }
}
