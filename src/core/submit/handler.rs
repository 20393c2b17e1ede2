//! Submit job handler
//!
//! Bridges the listener's event stream to the submission pipeline:
//! acknowledges the job, runs the pipeline, then reports the terminal
//! outcome back to the platform's job system.

use super::pipeline::SubmitPipeline;
use super::progress::JobProgress;
use crate::adapters::platform::PlatformApi;
use crate::adapters::webhook::WebhookSender;
use crate::core::listener::EventHandler;
use crate::domain::event::operations;
use crate::domain::{Event, Result, SheetflowError};
use async_trait::async_trait;
use std::sync::Arc;

/// Handles `job:ready` events for the `workbook:submit` operation
pub struct SubmitHandler {
    platform: Arc<dyn PlatformApi>,
    pipeline: SubmitPipeline,
}

impl SubmitHandler {
    /// Create a submit handler delivering to the given webhook URL
    pub fn new(
        platform: Arc<dyn PlatformApi>,
        webhook: Arc<dyn WebhookSender>,
        webhook_url: impl Into<String>,
    ) -> Self {
        let pipeline = SubmitPipeline::new(platform.clone(), webhook, webhook_url);
        Self { platform, pipeline }
    }
}

#[async_trait]
impl EventHandler for SubmitHandler {
    fn accepts(&self, event: &Event) -> bool {
        event.is_job_operation(operations::WORKBOOK_SUBMIT)
    }

    async fn handle(&self, event: &Event) -> Result<()> {
        let job_id = event
            .context
            .job_id
            .clone()
            .ok_or_else(|| SheetflowError::Validation("Submit event has no job id".to_string()))?;
        let workbook_id = event.context.workbook_id.clone().ok_or_else(|| {
            SheetflowError::Validation("Submit event has no workbook id".to_string())
        })?;

        self.platform.ack_job(&job_id, "Accepted submit job").await?;

        let progress = JobProgress::new(self.platform.clone(), job_id.clone());

        match self
            .pipeline
            .submit(&workbook_id, &event.payload, &progress)
            .await
        {
            Ok(outcome) => {
                self.platform.complete_job(&job_id, &outcome).await?;
                Ok(())
            }
            Err(failure) => {
                // The job is marked failed on the platform first; the
                // wrapped error still propagates for logging upstream
                self.platform
                    .fail_job(&job_id, &failure.to_string())
                    .await?;
                Err(failure.into())
            }
        }
    }
}
