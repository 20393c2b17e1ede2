//! Webhook delivery adapter

pub mod sender;

pub use sender::{HttpWebhookSender, WebhookSender};
