//! Job outcome model
//!
//! A job is an asynchronous unit of work tracked by the platform. The
//! listener only ever reports a terminal outcome; all intermediate state
//! lives on the platform side.

use serde::{Deserialize, Serialize};

/// Terminal outcome of a successfully completed job
///
/// The message is shown to the end user in the platform's job UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOutcome {
    /// Human-readable completion message
    pub message: String,
}

impl JobOutcome {
    /// Create a success outcome with the given message
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
