//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into registration-level APIs.
//! - Keep callers decoupled from key layout and wire encoding.

pub mod agent_service;
