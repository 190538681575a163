//! Process configuration, read from the environment (after `.env` loading).
//!
//! | Variable | Default |
//! |---|---|
//! | `STOCKWISE_BIND_ADDRESS` | `127.0.0.1:5000` |
//! | `STOCKWISE_API_TOKEN` | unset (gate disabled) |
//! | `STOCKWISE_ENGINE_CONFIG` | unset (built-in [`EngineConfig`]) |
//! | `STOCKWISE_SEED_FILE` | unset (built-in demo catalog) |

use crate::engine::EngineConfig;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BIND_ADDRESS_VAR: &str = "STOCKWISE_BIND_ADDRESS";
pub const API_TOKEN_VAR: &str = "STOCKWISE_API_TOKEN";
pub const ENGINE_CONFIG_VAR: &str = "STOCKWISE_ENGINE_CONFIG";
pub const SEED_FILE_VAR: &str = "STOCKWISE_SEED_FILE";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse seed data: {0}")]
    Json(String),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,

    /// Bearer token required on `/api` routes. `None` leaves them open.
    pub api_token: Option<String>,

    pub engine: EngineConfig,

    /// JSON catalog to seed from instead of the built-in fixture.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_address = var(BIND_ADDRESS_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{BIND_ADDRESS_VAR}: {e}")))?;

        let engine = match var(ENGINE_CONFIG_VAR) {
            Some(path) => load_engine_config(Path::new(&path))?,
            None => EngineConfig::default(),
        };

        Ok(Self {
            bind_address,
            api_token: var(API_TOKEN_VAR),
            engine,
            seed_file: var(SEED_FILE_VAR).map(PathBuf::from),
        })
    }
}

/// Reads and validates an [`EngineConfig`] TOML file.
pub fn load_engine_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    EngineConfig::from_toml_str(&source)
}
