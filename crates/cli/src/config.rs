//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GUAVA_DATA_FILE` - path of the JSON store document
//!   (default: `guava-store.json` in the working directory)
//!
//! A `.env` file in the working directory is honored.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DATA_FILE_VAR: &str = "GUAVA_DATA_FILE";
const DEFAULT_DATA_FILE: &str = "guava-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the JSON store document.
    pub data_file: PathBuf,
}

impl CliConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `GUAVA_DATA_FILE` is set
    /// but empty or not valid Unicode.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_file = match env::var(DATA_FILE_VAR) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_FILE_VAR,
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_FILE),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_FILE_VAR,
                    "must be valid Unicode".to_owned(),
                ));
            }
        };

        Ok(Self { data_file })
    }
}
