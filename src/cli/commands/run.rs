//! Run command implementation
//!
//! This module implements the `run` command: it builds the platform client,
//! registers the standard event handlers and polls the event stream until
//! a shutdown signal arrives.

use crate::adapters::platform::{PlatformApi, RestPlatformClient};
use crate::adapters::webhook::HttpWebhookSender;
use crate::config::load_config;
use crate::core::listener::Listener;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override poll interval in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Override webhook URL the submission payload is delivered to
    #[arg(long)]
    pub webhook_url: Option<String>,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting listener");

        // Load configuration
        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(interval) = self.poll_interval_ms {
            tracing::info!(poll_interval_ms = interval, "Overriding poll interval from CLI");
            config.listener.poll_interval_ms = interval;
        }

        if let Some(url) = &self.webhook_url {
            tracing::info!(webhook_url = %url, "Overriding webhook URL from CLI");
            config.webhook.url = url.clone();
        }

        let platform = Arc::new(RestPlatformClient::new(&config.platform)?);
        let webhook = Arc::new(HttpWebhookSender::new());

        let listener = Listener::from_config(platform.clone(), webhook, &config);

        tracing::info!(
            base_url = %platform.base_url(),
            handlers = listener.handler_count(),
            poll_interval_ms = config.listener.poll_interval_ms,
            "Listener configured"
        );

        println!("🚀 Sheetflow listener started");
        println!("   Platform: {}", platform.base_url());
        println!("   Webhook:  {}", config.webhook.url);
        println!("   Press Ctrl+C to stop");
        println!();

        listener
            .run(
                platform,
                Duration::from_millis(config.listener.poll_interval_ms),
                config.listener.page_size,
                shutdown_signal,
            )
            .await?;

        println!("✅ Listener stopped");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_args_defaults() {
        let args = RunArgs {
            poll_interval_ms: None,
            webhook_url: None,
        };
        assert!(args.poll_interval_ms.is_none());
        assert!(args.webhook_url.is_none());
    }
}
