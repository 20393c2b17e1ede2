//! Core business logic
//!
//! The submission pipeline, the event listener, space setup and the
//! record hooks that run on commits.

pub mod hooks;
pub mod listener;
pub mod space;
pub mod submit;
