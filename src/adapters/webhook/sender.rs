//! Webhook delivery adapter
//!
//! A single JSON POST per submission. No retry, no timeout override -
//! the default transport behavior is the contract. Status interpretation
//! is the caller's business; this adapter only distinguishes "the wire
//! answered" from "the wire did not".

use crate::domain::{DeliveryError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Outbound webhook delivery
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// POST the body as JSON to the URL and return the response status code
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Unreachable`] if the request could not be
    /// sent at all. A response with any status code, including errors,
    /// is returned as `Ok(status)`.
    async fn deliver(&self, url: &str, body: &serde_json::Value) -> Result<u16>;
}

/// reqwest-backed webhook sender
pub struct HttpWebhookSender {
    client: Client,
}

impl HttpWebhookSender {
    /// Create a sender with default transport settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpWebhookSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookSender for HttpWebhookSender {
    async fn deliver(&self, url: &str, body: &serde_json::Value) -> Result<u16> {
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Unreachable {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();

        tracing::debug!(url = %url, status = status, "Webhook delivery attempt finished");

        Ok(status)
    }
}
