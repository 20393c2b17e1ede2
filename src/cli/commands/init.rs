//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sheetflow.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Sheetflow configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Write to file
        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set SHEETFLOW_API_TOKEN");
                println!("  3. Validate configuration: sheetflow validate-config");
                println!("  4. Start the listener: sheetflow run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Sheetflow Configuration File
# Data import listener

# Runtime environment (development, staging, production)
environment = "development"

[application]
log_level = "info"

[platform]
base_url = "https://platform.example.com/api/v1"
api_token = "${SHEETFLOW_API_TOKEN}"
timeout_seconds = 30
tls_verify = true

[webhook]
url = "https://webhook.site/your-unique-id"

[listener]
poll_interval_ms = 1000
page_size = 50

[hooks]
capitalize_sheet_slug = "example-sheet"
capitalize_field = "name"
# contains_field = "email"
# contains_needle = "@"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
