//! Shared configuration types for SoundShelf clients
//!
//! This crate provides the configuration used by the catalog client and the
//! "My Music" view-model, loaded from environment variables (and an optional
//! `.env` file).

mod backend;
mod error;

pub use backend::{BackendConfig, DEFAULT_API_URL, DEFAULT_CSRF_PATH};
pub use error::{ConfigError, ConfigResult};

use std::env;
use std::fmt;

/// Common configuration shared by every SoundShelf client
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Catalog backend configuration
    pub backend: BackendConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log level (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            backend: BackendConfig::from_env()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            "stage".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!(
            "anything".parse::<Environment>().unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(format!("{}", Environment::Production), "production");
        assert_eq!(format!("{}", Environment::Staging), "staging");
        assert_eq!(format!("{}", Environment::Development), "development");
    }

    #[test]
    fn test_environment_checks() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(!Environment::Development.is_production());
    }

    #[test]
    fn test_parse_env_invalid_value() {
        temp_env::with_var("SOUNDSHELF_TEST_NUMBER", Some("many"), || {
            match parse_env("SOUNDSHELF_TEST_NUMBER", 1u64) {
                Err(ConfigError::InvalidValue(name, _)) => {
                    assert_eq!(name, "SOUNDSHELF_TEST_NUMBER")
                }
                other => panic!("expected InvalidValue, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_common_config_log_level_fallback() {
        temp_env::with_vars(
            [
                ("RUST_LOG", None),
                ("LOG_LEVEL", Some("debug")),
                ("ENVIRONMENT", Some("prod")),
            ],
            || {
                let config = CommonConfig::from_env().unwrap();
                assert_eq!(config.log_level, "debug");
                assert!(config.environment.is_production());
            },
        );
    }
}
