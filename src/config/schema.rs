//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the
//! `sheetflow.toml` file. Every deployment-time constant the listener
//! needs - platform base URL, API token, webhook URL - is injected here
//! and never read from ambient process state at call sites.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use url::Url;

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main sheetflow configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetflowConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Import-platform API configuration
    pub platform: PlatformConfig,

    /// Webhook delivery configuration
    pub webhook: WebhookConfig,

    /// Event listener configuration
    #[serde(default)]
    pub listener: ListenerConfig,

    /// Record hook and constraint configuration
    #[serde(default)]
    pub hooks: HooksConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SheetflowConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.platform.validate(&self.environment)?;
        self.webhook.validate()?;
        self.listener.validate()?;
        self.hooks.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Import-platform API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform's REST API
    pub base_url: String,

    /// Bearer token for API authentication
    /// Stored securely in memory and automatically zeroized on drop
    pub api_token: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl PlatformConfig {
    fn validate(&self, environment: &Environment) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid platform base_url '{}': {}", self.base_url, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "platform base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.api_token.expose_secret().is_empty() {
            return Err("platform api_token cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("platform timeout_seconds must be greater than zero".to_string());
        }

        // Production deployments must not weaken transport security
        if *environment == Environment::Production {
            if url.scheme() != "https" {
                return Err("platform base_url must use https in production".to_string());
            }
            if !self.tls_verify {
                return Err("tls_verify cannot be disabled in production".to_string());
            }
        }

        Ok(())
    }
}

/// Webhook delivery configuration
///
/// The webhook URL is a deployment-time constant; there is no runtime
/// reconfiguration surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// URL the submission payload is POSTed to
    pub url: String,
}

impl WebhookConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.url)
            .map_err(|e| format!("Invalid webhook url '{}': {}", self.url, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "webhook url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        Ok(())
    }
}

/// Event listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// Delay between event polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum events fetched per poll
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            page_size: default_page_size(),
        }
    }
}

impl ListenerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.poll_interval_ms == 0 {
            return Err("listener poll_interval_ms must be greater than zero".to_string());
        }
        if self.page_size == 0 {
            return Err("listener page_size must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Record hook and field constraint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Slug of the sheet the capitalize hook applies to
    #[serde(default = "default_capitalize_sheet_slug")]
    pub capitalize_sheet_slug: String,

    /// Field the capitalize hook rewrites
    #[serde(default = "default_capitalize_field")]
    pub capitalize_field: String,

    /// Field the contains-constraint checks (constraint disabled when unset)
    #[serde(default)]
    pub contains_field: Option<String>,

    /// Substring the constrained field must include
    #[serde(default)]
    pub contains_needle: Option<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            capitalize_sheet_slug: default_capitalize_sheet_slug(),
            capitalize_field: default_capitalize_field(),
            contains_field: None,
            contains_needle: None,
        }
    }
}

impl HooksConfig {
    fn validate(&self) -> Result<(), String> {
        if self.capitalize_field.trim().is_empty() {
            return Err("hooks capitalize_field cannot be empty".to_string());
        }

        match (&self.contains_field, &self.contains_needle) {
            (Some(_), None) | (None, Some(_)) => Err(
                "hooks contains_field and contains_needle must be set together".to_string(),
            ),
            (Some(_), Some(needle)) if needle.is_empty() => {
                Err("hooks contains_needle cannot be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory log files are written to
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_page_size() -> usize {
    50
}

fn default_capitalize_sheet_slug() -> String {
    "example-sheet".to_string()
}

fn default_capitalize_field() -> String {
    "name".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn base_config() -> SheetflowConfig {
        SheetflowConfig {
            application: ApplicationConfig::default(),
            environment: Environment::Development,
            platform: PlatformConfig {
                base_url: "https://platform.example.com/api/v1".to_string(),
                api_token: secret_string("sk_test".to_string()),
                timeout_seconds: 30,
                tls_verify: true,
            },
            webhook: WebhookConfig {
                url: "https://hooks.example.com/abc".to_string(),
            },
            listener: ListenerConfig::default(),
            hooks: HooksConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = base_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = base_config();
        config.platform.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_api_token_rejected() {
        let mut config = base_config();
        config.platform.api_token = secret_string(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_production_requires_https() {
        let mut config = base_config();
        config.environment = Environment::Production;
        config.platform.base_url = "http://platform.example.com".to_string();
        assert!(config.validate().is_err());

        config.platform.base_url = "https://platform.example.com".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_rejects_disabled_tls_verify() {
        let mut config = base_config();
        config.environment = Environment::Production;
        config.platform.tls_verify = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_webhook_url_scheme() {
        let mut config = base_config();
        config.webhook.url = "ftp://hooks.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = base_config();
        config.listener.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_contains_constraint_must_be_paired() {
        let mut config = base_config();
        config.hooks.contains_field = Some("email".to_string());
        assert!(config.validate().is_err());

        config.hooks.contains_needle = Some("@".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = base_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }
}
