//! Key-value storage contract and backends.
//!
//! # Responsibility
//! - Define the primitive store operations the repository is written
//!   against (SET/GET/DEL/KEYS).
//! - Keep backend details out of repository and service code.
//!
//! # Invariants
//! - Connectivity failures surface as `StoreError::Connection`, never as
//!   silent data loss.
//! - `keys` patterns use glob syntax with `*` as the only wildcard.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;

pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a key-value backend.
#[derive(Debug)]
pub enum StoreError {
    /// Store unreachable or connection closed mid-operation.
    Connection { message: String },
    /// Key pattern the backend cannot evaluate.
    InvalidPattern { pattern: String, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection { message } => write!(f, "store connection failure: {message}"),
            Self::InvalidPattern { pattern, message } => {
                write!(f, "invalid key pattern `{pattern}`: {message}")
            }
        }
    }
}

impl Error for StoreError {}

/// Primitive operations of a Redis-like key-value service.
///
/// One synchronous round trip per call; timeouts and retries belong to the
/// backend client, not to this contract.
pub trait KeyValueStore {
    /// Upserts `value` under `key`. Returns `true` when the write was
    /// acknowledged, `false` when the store rejected it.
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<bool>;

    /// Fetches the value under `key`, or `None` on a miss.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Removes `key`. Returns the number of records removed (0 or 1).
    fn del(&self, key: &str) -> StoreResult<u64>;

    /// Enumerates keys matching a glob `pattern` in store order.
    fn keys(&self, pattern: &str) -> StoreResult<Vec<String>>;
}
