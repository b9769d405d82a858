//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUMMIT_TRAINER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use summit_trainer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to install tracing");
//! ```

mod catalog;
mod error;
mod logging;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration backed by the embedded catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog source (embedded or YAML file)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SUMMIT_TRAINER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SUMMIT_TRAINER__CATALOG__PATH=./catalog.yaml` -> `catalog.path`
    /// - `SUMMIT_TRAINER__LOGGING__FORMAT=json` -> `logging.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUMMIT_TRAINER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log directive does not parse or a
    /// configured catalog file does not exist.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SUMMIT_TRAINER__CATALOG__PATH");
        env::remove_var("SUMMIT_TRAINER__LOGGING__LEVEL");
        env::remove_var("SUMMIT_TRAINER__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.catalog.uses_builtin());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();
        env::set_var("SUMMIT_TRAINER__CATALOG__PATH", file.path());
        env::set_var("SUMMIT_TRAINER__LOGGING__LEVEL", "debug");
        env::set_var("SUMMIT_TRAINER__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some(file.path()));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_catalog() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SUMMIT_TRAINER__CATALOG__PATH", "/nonexistent/catalog.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogNotFound(_))
        ));
    }
}
