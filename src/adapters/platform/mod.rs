//! Import-platform adapter
//!
//! The [`PlatformApi`] trait is the seam between this listener and the
//! platform's REST API; [`RestPlatformClient`] is the production
//! implementation. Tests substitute in-memory fakes.

pub mod client;
pub mod models;
pub mod rest;

pub use client::PlatformApi;
pub use rest::RestPlatformClient;
