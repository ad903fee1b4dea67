//! Core domain logic for the agent store.
//! This crate is the single source of truth for agent persistence rules.

pub mod codec;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use codec::{AgentCodec, CodecError, JsonCodec};
pub use config::{ConfigError, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::agent::{Agent, AgentId, AgentValidationError};
pub use repo::agent_repo::{AgentRepository, KvAgentRepository, RepoError, RepoResult};
pub use service::agent_service::{AgentService, IdentifierFactory, TimestampIdentifierFactory};
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
