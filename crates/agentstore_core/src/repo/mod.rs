//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the agent persistence contract used by service code.
//! - Isolate key layout and wire encoding from business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Agent::validate()` before touching the
//!   store.
//! - Logical misses (delete of an absent key, rejected write) are boolean
//!   results, not errors; only transport failures raise.

pub mod agent_repo;
