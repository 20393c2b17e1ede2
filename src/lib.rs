// Sheetflow - Data Import Listener
// Copyright (c) 2025 Sheetflow Contributors
// Licensed under the MIT License

//! # Sheetflow - Data Import Listener
//!
//! Sheetflow is a listener service built in Rust that configures data-import
//! workbooks on a collaborative import platform and forwards submitted sheet
//! data to a configured webhook.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Configuring** spaces with a workbook blueprint when a space is created
//! - **Validating** records with per-field hooks and constraints on commit
//! - **Submitting** all sheet data of a workbook to a webhook as one payload
//!
//! ## Architecture
//!
//! Sheetflow follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (listener, submit pipeline, hooks, space setup)
//! - [`adapters`] - External integrations (platform REST API, webhook delivery)
//! - [`blueprints`] - Workbook, sheet and action definitions
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sheetflow::adapters::platform::RestPlatformClient;
//! use sheetflow::adapters::webhook::HttpWebhookSender;
//! use sheetflow::config::load_config;
//! use sheetflow::core::listener::Listener;
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("sheetflow.toml")?;
//!
//!     let platform = Arc::new(RestPlatformClient::new(&config.platform)?);
//!     let webhook = Arc::new(HttpWebhookSender::new());
//!     let listener = Listener::from_config(platform.clone(), webhook, &config);
//!
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!     listener
//!         .run(
//!             platform,
//!             Duration::from_millis(config.listener.poll_interval_ms),
//!             config.listener.page_size,
//!             shutdown_rx,
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Sheetflow uses the [`domain::SheetflowError`] type for all errors:
//!
//! ```rust,no_run
//! use sheetflow::domain::SheetflowError;
//!
//! fn example() -> Result<(), SheetflowError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = sheetflow::config::load_config("sheetflow.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Sheetflow uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Listener started");
//! warn!(sheet_slug = "contacts", "No records found");
//! error!(error = "connection refused", "Submission failed");
//! ```

pub mod adapters;
pub mod blueprints;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
