//! Server configuration
//!
//! Read from the runtime secret store through a lookup closure:
//!
//! - `VIE_BASE_PATH`: prefix for the API routes (default `/api`)
//! - `VIE_SWAGGER_ENABLED`: serve Swagger UI (default `true`)
//! - `VIE_STORAGE`: `postgres` (default) or `memory`

use thiserror::Error;

const DEFAULT_BASE_PATH: &str = "/api";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VIE_BASE_PATH must start with '/': {0}")]
    InvalidBasePath(String),

    #[error("{key} must be a boolean, got '{value}'")]
    InvalidBool { key: String, value: String },

    #[error("Unknown VIE_STORAGE backend: {0}")]
    UnknownStorage(String),
}

/// Where Vie records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    /// Process-local, lost on restart
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::UnknownStorage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Normalized prefix, empty when routes sit at the root
    pub base_path: String,
    pub swagger_enabled: bool,
    pub storage: StorageBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            swagger_enabled: true,
            storage: StorageBackend::Postgres,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from a key lookup, e.g. `|k| secrets.get(k)`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("VIE_BASE_PATH") {
            config.base_path = normalize_base_path(&raw)?;
        }

        if let Some(raw) = lookup("VIE_SWAGGER_ENABLED") {
            config.swagger_enabled = parse_bool("VIE_SWAGGER_ENABLED", &raw)?;
        }

        if let Some(raw) = lookup("VIE_STORAGE") {
            config.storage = raw.parse()?;
        }

        Ok(config)
    }
}

fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
