//! External integrations
//!
//! Adapters wrap every outbound surface - the import platform's REST API
//! and the webhook target - behind traits the core logic depends on.

pub mod platform;
pub mod webhook;
