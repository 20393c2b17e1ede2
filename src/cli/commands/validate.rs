//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Sheetflow configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (load_config validates as part of loading)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Environment: {:?}", config.environment);
                println!("  Log Level: {}", config.application.log_level);
                println!("  Platform API: {}", config.platform.base_url);
                println!("  TLS Verify: {}", config.platform.tls_verify);
                println!("  Webhook URL: {}", config.webhook.url);
                println!(
                    "  Poll Interval: {}ms",
                    config.listener.poll_interval_ms
                );
                println!("  Page Size: {}", config.listener.page_size);
                println!("  Hook Sheet Slug: {}", config.hooks.capitalize_sheet_slug);
                println!("  Hook Field: {}", config.hooks.capitalize_field);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
