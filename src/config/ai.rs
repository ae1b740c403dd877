//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL};

/// Value shipped in sample `.env` files; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_groq_api_key_here";

/// External generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Groq API key
    pub groq_api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API root for the OpenAI-compatible endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the API key if one is set and is not the placeholder.
    pub fn api_key(&self) -> Option<&str> {
        self.groq_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }

    /// Check if the external generator is configured
    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    ///
    /// A missing key is valid: decomposition runs offline.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI_MODEL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAiBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_GROQ_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_GROQ_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "llama3-8b-8192");
        assert_eq!(config.timeout_secs, 20);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_placeholder_key_is_not_configured() {
        let config = AiConfig {
            groq_api_key: Some(PLACEHOLDER_API_KEY.to_string()),
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = AiConfig {
            groq_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn test_real_key_is_configured() {
        let config = AiConfig {
            groq_api_key: Some("gsk_abc123".to_string()),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(config.api_key(), Some("gsk_abc123"));
    }

    #[test]
    fn test_validation_without_key_is_ok() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let config = AiConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = AiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
