//! Domain model for registered agents.
//!
//! # Responsibility
//! - Define the canonical agent record shared by all persistence backends.
//! - Keep identity rules (sequence id, external identifier, correlation id)
//!   in one place.
//!
//! # Invariants
//! - `identifier` is the storage key and never changes after construction.
//! - `correlation_id` is stable and never reused for another agent.

pub mod agent;
