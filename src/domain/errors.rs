//! Domain error types
//!
//! Error hierarchy for sheetflow. All errors are domain-specific and
//! don't expose third-party types such as reqwest errors.

use thiserror::Error;

/// Main sheetflow error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum SheetflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Import-platform API errors
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Webhook delivery errors
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// A job that failed as a whole, all causes collapsed
    #[error(transparent)]
    Job(#[from] JobFailure),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Import-platform specific errors
///
/// Errors that occur when talking to the platform's REST API. These
/// never leak HTTP client types past the adapter boundary.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to connect to the platform
    #[error("Failed to connect to platform: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the platform
    #[error("Invalid response from platform: {0}")]
    InvalidResponse(String),

    /// Workbook not found
    #[error("Workbook not found: {0}")]
    WorkbookNotFound(String),

    /// Sheet not found
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Job not found
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Webhook delivery errors
///
/// The submission contract is strict: only HTTP 200 counts as accepted.
/// Everything else, 2xx included, is a rejection.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The webhook answered with a status other than 200
    #[error("Failed to submit data to {url}")]
    Rejected { url: String, status: u16 },

    /// The webhook could not be reached at all
    #[error("Failed to reach {url}: {message}")]
    Unreachable { url: String, message: String },
}

/// The broad failure category of a wrapped job error
///
/// The user-facing message collapses every cause into one string, but the
/// kind is kept so callers (and tests) can still tell an upstream fetch
/// problem apart from a webhook delivery problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFailureKind {
    /// Fetching sheets or records from the platform failed
    Fetch,
    /// The webhook rejected the payload or was unreachable
    Delivery,
    /// Anything else (serialization, configuration, unknown)
    Other,
}

/// Catch-all wrapper for any error raised while running a job
///
/// All failure modes inside a job handler collapse into this one type,
/// which is what the platform's job UI ultimately displays.
#[derive(Debug, Error)]
#[error("Job failed: {message}")]
pub struct JobFailure {
    /// Coarse failure category, preserved for diagnostics
    pub kind: JobFailureKind,
    /// Original error message, or "Unknown error" if there was none
    pub message: String,
}

impl JobFailure {
    /// Wraps any sheetflow error into a job failure
    ///
    /// The original message is carried verbatim; an error that renders to
    /// an empty string becomes the literal "Unknown error".
    pub fn wrap(err: SheetflowError) -> Self {
        // The job outcome carries the underlying message without the
        // taxonomy prefix the outer variants add.
        let (kind, message) = match &err {
            SheetflowError::Platform(e) => (JobFailureKind::Fetch, e.to_string()),
            SheetflowError::Delivery(e) => (JobFailureKind::Delivery, e.to_string()),
            _ => (JobFailureKind::Other, err.to_string()),
        };
        let message = if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };

        Self { kind, message }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SheetflowError {
    fn from(err: std::io::Error) -> Self {
        SheetflowError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SheetflowError {
    fn from(err: serde_json::Error) -> Self {
        SheetflowError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SheetflowError {
    fn from(err: toml::de::Error) -> Self {
        SheetflowError::Configuration(format!("TOML parse error: {err}"))
    }
}
