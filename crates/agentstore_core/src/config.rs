//! Store connection configuration.
//!
//! # Responsibility
//! - Carry the externally-supplied store address and namespace into
//!   repository construction.
//! - Validate configuration before any connection is attempted.
//!
//! # Invariants
//! - Repository and store code never read configuration files or
//!   environment themselves; they receive a validated `StoreConfig`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const DEFAULT_NAMESPACE: &str = "agents";

/// Connection settings for the remote key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store host name or address.
    pub host: String,
    /// Store TCP port.
    pub port: u16,
    /// Key-prefix scope for this entity type.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl StoreConfig {
    /// Parses a `host:port` address string with the default namespace.
    pub fn from_addr(addr: &str) -> Result<Self, ConfigError> {
        let (host, port_text) = addr.rsplit_once(':').ok_or_else(|| ConfigError::BadAddr {
            addr: addr.to_string(),
        })?;
        let port = port_text.parse().map_err(|_| ConfigError::BadAddr {
            addr: addr.to_string(),
        })?;
        let config = Self {
            host: host.to_string(),
            port,
            namespace: default_namespace(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|err| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        })?;
        let config: Self =
            serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
                path: path.as_ref().display().to_string(),
                message: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings can describe a reachable store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        Ok(())
    }
}

/// Configuration problems detected before connecting.
#[derive(Debug)]
pub enum ConfigError {
    BadAddr { addr: String },
    Io { path: String, message: String },
    Parse { path: String, message: String },
    EmptyHost,
    ZeroPort,
    EmptyNamespace,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadAddr { addr } => {
                write!(f, "expected `host:port` store address, got `{addr}`")
            }
            Self::Io { path, message } => {
                write!(f, "failed to read config file `{path}`: {message}")
            }
            Self::Parse { path, message } => {
                write!(f, "failed to parse config file `{path}`: {message}")
            }
            Self::EmptyHost => write!(f, "store host must not be empty"),
            Self::ZeroPort => write!(f, "store port must not be 0"),
            Self::EmptyNamespace => write!(f, "store namespace must not be empty"),
        }
    }
}

impl Error for ConfigError {}
