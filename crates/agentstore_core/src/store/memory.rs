//! In-process key-value backend.
//!
//! # Responsibility
//! - Provide a thread-safe store for local development and tests.
//! - Mirror remote-store failure modes (connection loss) on demand.
//!
//! # Invariants
//! - Cloned handles share one underlying map.
//! - A disconnected handle fails every operation with
//!   `StoreError::Connection` until reconnected.

use super::{KeyValueStore, StoreError, StoreResult};
use log::info;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared in-memory key-value store.
///
/// Keys enumerate in lexicographic order, which stands in for the
/// backend-defined order of a remote KEYS scan.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    connected: Arc<AtomicBool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        info!("event=store_open module=store status=ok mode=memory");
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulates losing the connection; every handle sharing this store
    /// starts failing until `reconnect` is called.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Restores connectivity after `disconnect`.
    pub fn reconnect(&self) {
        self.connected.store(true, Ordering::SeqCst);
    }

    fn check_connected(&self) -> StoreResult<()> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Connection {
                message: "store is not reachable".to_string(),
            })
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<bool> {
        self.check_connected()?;
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(key.to_string(), value.to_vec());
        Ok(true)
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        self.check_connected()?;
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(key).cloned())
    }

    fn del(&self, key: &str) -> StoreResult<u64> {
        self.check_connected()?;
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(u64::from(records.remove(key).is_some()))
    }

    fn keys(&self, pattern: &str) -> StoreResult<Vec<String>> {
        self.check_connected()?;
        let matcher = compile_glob(pattern)?;
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .keys()
            .filter(|key| matcher.is_match(key))
            .cloned()
            .collect())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Connection {
        message: "store lock poisoned".to_string(),
    }
}

/// Compiles a glob pattern (`*` wildcard only) to an anchored regex.
fn compile_glob(pattern: &str) -> StoreResult<Regex> {
    let mut source = String::with_capacity(pattern.len() + 4);
    source.push('^');
    for (index, segment) in pattern.split('*').enumerate() {
        if index > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(segment));
    }
    source.push('$');
    Regex::new(&source).map_err(|err| StoreError::InvalidPattern {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::compile_glob;

    #[test]
    fn glob_matches_prefix_wildcard() {
        let matcher = compile_glob("agents:*").unwrap();
        assert!(matcher.is_match("agents:sensor-1"));
        assert!(!matcher.is_match("missions:sensor-1"));
    }

    #[test]
    fn glob_without_wildcard_is_exact() {
        let matcher = compile_glob("agents:sensor-1").unwrap();
        assert!(matcher.is_match("agents:sensor-1"));
        assert!(!matcher.is_match("agents:sensor-12"));
    }

    #[test]
    fn glob_escapes_regex_metacharacters() {
        let matcher = compile_glob("agents:a.b+c*").unwrap();
        assert!(matcher.is_match("agents:a.b+c-1"));
        assert!(!matcher.is_match("agents:aXb+c-1"));
    }
}
