//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use sheetflow::logging::init_logging;
//! use sheetflow::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a job handled off the event stream
#[macro_export]
macro_rules! log_job_start {
    ($job_id:expr, $operation:expr) => {
        tracing::info!(
            job_id = %$job_id,
            operation = $operation,
            "Starting job"
        );
    };
}

/// Log the completion of a job
#[macro_export]
macro_rules! log_job_complete {
    ($job_id:expr, $duration:expr) => {
        tracing::info!(
            job_id = %$job_id,
            duration_ms = $duration.as_millis(),
            "Job completed"
        );
    };
}

/// Log an error with context
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_compile() {
        // These tests just verify that the macros compile correctly
        // Actual logging output is not tested in unit tests
    }
}
