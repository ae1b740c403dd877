//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GOAL_BREAKER` prefix and nested values use double underscores as separators.
//!
//! The unprefixed `GROQ_API_KEY`, `GROQ_MODEL` and `DATABASE_URL` variables are
//! honoured as defaults so an existing `.env` keeps working.
//!
//! # Example
//!
//! ```no_run
//! use goal_breaker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod database;
mod error;
mod server;

pub use ai::{AiConfig, PLACEHOLDER_API_KEY};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Unprefixed variables and the config keys they feed.
const LEGACY_ENV_KEYS: [(&str, &str); 3] = [
    ("GROQ_API_KEY", "ai.groq_api_key"),
    ("GROQ_MODEL", "ai.model"),
    ("DATABASE_URL", "database.url"),
];

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// External generator configuration (Groq)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds defaults from the legacy unprefixed variables
    /// 3. Reads environment variables with `GOAL_BREAKER` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GOAL_BREAKER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `GOAL_BREAKER__DATABASE__URL=...` -> `database.url = ...`
    /// - `GOAL_BREAKER__AI__GROQ_API_KEY=...` -> `ai.groq_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in LEGACY_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("GOAL_BREAKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The generator timeout must be shorter than the request timeout, so a
    /// slow Groq call ends in the local fallback instead of a 408.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::AiTimeoutExceedsRequestTimeout {
                ai_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const MANAGED_VARS: [&str; 10] = [
        "GOAL_BREAKER__DATABASE__URL",
        "GOAL_BREAKER__SERVER__PORT",
        "GOAL_BREAKER__SERVER__ENVIRONMENT",
        "GOAL_BREAKER__SERVER__REQUEST_TIMEOUT_SECS",
        "GOAL_BREAKER__AI__TIMEOUT_SECS",
        "GOAL_BREAKER__AI__GROQ_API_KEY",
        "GOAL_BREAKER__AI__MODEL",
        "GROQ_API_KEY",
        "GROQ_MODEL",
        "DATABASE_URL",
    ];

    fn set_minimal_env() {
        clear_env();
        env::set_var("GOAL_BREAKER__DATABASE__URL", "postgresql://test@localhost/test");
    }

    fn clear_env() {
        for var in MANAGED_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert!(!config.ai.is_configured());
    }

    #[test]
    fn test_validate_minimal_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.model, "llama3-8b-8192");
    }

    #[test]
    fn test_default_ai_timeout_is_below_request_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.timeout_secs < config.server.request_timeout_secs);
    }

    #[test]
    fn test_ai_timeout_at_request_timeout_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GOAL_BREAKER__SERVER__REQUEST_TIMEOUT_SECS", "30");
        env::set_var("GOAL_BREAKER__AI__TIMEOUT_SECS", "30");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::AiTimeoutExceedsRequestTimeout {
                ai_secs: 30,
                request_secs: 30
            })
        ));
    }

    #[test]
    fn test_ai_timeout_above_request_timeout_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GOAL_BREAKER__SERVER__REQUEST_TIMEOUT_SECS", "10");
        env::set_var("GOAL_BREAKER__AI__TIMEOUT_SECS", "60");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GOAL_BREAKER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GOAL_BREAKER__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_legacy_variables_are_used_as_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DATABASE_URL", "postgres://legacy@localhost/goals");
        env::set_var("GROQ_API_KEY", "gsk_legacy");
        env::set_var("GROQ_MODEL", "llama3-70b-8192");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "postgres://legacy@localhost/goals");
        assert_eq!(config.ai.api_key(), Some("gsk_legacy"));
        assert_eq!(config.ai.model, "llama3-70b-8192");
    }

    #[test]
    fn test_prefixed_variables_win_over_legacy() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("GROQ_API_KEY", "gsk_legacy");
        env::set_var("GOAL_BREAKER__AI__GROQ_API_KEY", "gsk_prefixed");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.api_key(), Some("gsk_prefixed"));
    }

    #[test]
    fn test_missing_database_url_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_err());
    }
}
