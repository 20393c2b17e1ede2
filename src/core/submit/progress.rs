//! Job progress reporting
//!
//! Progress is purely advisory: there is no consumer-side contract
//! beyond display. The reporter is awaited at its call sites so the
//! "progress before any fetch" ordering holds, but a platform error
//! while reporting is logged and swallowed rather than failing the job.

use crate::adapters::platform::PlatformApi;
use crate::domain::{JobId, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Advisory progress sink for long-running jobs
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// Report a progress percentage (0-100) and a display message
    async fn tick(&self, percent: u8, message: &str) -> Result<()>;
}

/// Progress reporter bound to one platform job
pub struct JobProgress {
    platform: Arc<dyn PlatformApi>,
    job_id: JobId,
}

impl JobProgress {
    /// Bind a reporter to a job
    pub fn new(platform: Arc<dyn PlatformApi>, job_id: JobId) -> Self {
        Self { platform, job_id }
    }
}

#[async_trait]
impl ProgressReporter for JobProgress {
    async fn tick(&self, percent: u8, message: &str) -> Result<()> {
        if let Err(e) = self
            .platform
            .update_job_progress(&self.job_id, percent, message)
            .await
        {
            tracing::warn!(
                job_id = %self.job_id,
                percent = percent,
                error = %e,
                "Failed to report job progress, continuing"
            );
        }
        Ok(())
    }
}

/// Reporter for contexts with no job to report against
pub struct NoopProgress;

#[async_trait]
impl ProgressReporter for NoopProgress {
    async fn tick(&self, _percent: u8, _message: &str) -> Result<()> {
        Ok(())
    }
}
