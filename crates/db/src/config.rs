//! Store settings read from the environment.

use std::path::PathBuf;

use crate::store::{Latency, DEFAULT_LATENCY_MAX_MS, DEFAULT_LATENCY_MIN_MS};

pub const ENV_LATENCY_MIN_MS: &str = "STORE_LATENCY_MIN_MS";
pub const ENV_LATENCY_MAX_MS: &str = "STORE_LATENCY_MAX_MS";
pub const ENV_SEED_DIR: &str = "SEED_DIR";

/// Malformed store configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid u64, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("STORE_LATENCY_MIN_MS ({min}) must not exceed STORE_LATENCY_MAX_MS ({max})")]
    InvertedLatency { min: u64, max: u64 },
}

/// Store configuration loaded from environment variables.
///
/// All fields have defaults matching the simulated backend's behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Inclusive lower bound of the simulated delay (default: `200`).
    pub latency_min_ms: u64,
    /// Exclusive upper bound of the simulated delay (default: `500`).
    pub latency_max_ms: u64,
    /// Directory of fixture JSON files. `None` uses the bundled fixtures.
    pub seed_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency_min_ms: DEFAULT_LATENCY_MIN_MS,
            latency_max_ms: DEFAULT_LATENCY_MAX_MS,
            seed_dir: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default          |
    /// |------------------------|------------------|
    /// | `STORE_LATENCY_MIN_MS` | `200`            |
    /// | `STORE_LATENCY_MAX_MS` | `500`            |
    /// | `SEED_DIR`             | bundled fixtures |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading values through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let latency_min_ms =
            parse_u64(ENV_LATENCY_MIN_MS, lookup(ENV_LATENCY_MIN_MS), DEFAULT_LATENCY_MIN_MS)?;
        let latency_max_ms =
            parse_u64(ENV_LATENCY_MAX_MS, lookup(ENV_LATENCY_MAX_MS), DEFAULT_LATENCY_MAX_MS)?;

        if latency_min_ms > latency_max_ms {
            return Err(ConfigError::InvertedLatency {
                min: latency_min_ms,
                max: latency_max_ms,
            });
        }

        let seed_dir = lookup(ENV_SEED_DIR)
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            latency_min_ms,
            latency_max_ms,
            seed_dir,
        })
    }

    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.latency_min_ms, self.latency_max_ms)
    }
}

fn parse_u64(var: &'static str, value: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    }
}
