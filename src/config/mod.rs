//! Configuration management for sheetflow.
//!
//! TOML-based configuration loading, parsing, and validation. Every
//! external dependency of the listener - platform API, webhook target,
//! poll cadence, hook wiring - is declared here and injected at
//! construction, so nothing reads ambient process state at call sites.
//!
//! # Example configuration
//!
//! ```toml
//! environment = "development"
//!
//! [application]
//! log_level = "info"
//!
//! [platform]
//! base_url = "https://platform.example.com/api/v1"
//! api_token = "${SHEETFLOW_API_TOKEN}"
//! timeout_seconds = 30
//!
//! [webhook]
//! url = "https://webhook.site/your-unique-url"
//!
//! [listener]
//! poll_interval_ms = 1000
//! page_size = 50
//!
//! [hooks]
//! capitalize_sheet_slug = "example-sheet"
//! capitalize_field = "name"
//! ```
//!
//! # Environment variables
//!
//! `${VAR_NAME}` placeholders are substituted at load time, and any
//! setting can be overridden with a `SHEETFLOW_<SECTION>_<KEY>` variable
//! (e.g. `SHEETFLOW_WEBHOOK_URL`).

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, Environment, HooksConfig, ListenerConfig, LoggingConfig, PlatformConfig,
    SheetflowConfig, WebhookConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
