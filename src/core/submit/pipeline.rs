//! Submission pipeline
//!
//! Given a workbook, collects every sheet and every record from the
//! platform, assembles one payload and delivers it to the configured
//! webhook with a single POST. Linear progression only:
//! Started -> Fetching -> Delivering -> {Succeeded | Failed}. No retry,
//! no partial-completion resume, no cross-invocation state.

use super::payload::build_payload;
use super::progress::ProgressReporter;
use crate::adapters::platform::PlatformApi;
use crate::adapters::webhook::WebhookSender;
use crate::domain::{DeliveryError, JobFailure, JobOutcome, Result, WorkbookId};
use std::sync::Arc;

/// Collects workbook data and delivers it to a webhook
pub struct SubmitPipeline {
    platform: Arc<dyn PlatformApi>,
    webhook: Arc<dyn WebhookSender>,
    webhook_url: String,
}

impl SubmitPipeline {
    /// Create a pipeline targeting the given webhook URL
    ///
    /// The URL is a deployment-time constant injected here; nothing in
    /// the pipeline reads ambient process state.
    pub fn new(
        platform: Arc<dyn PlatformApi>,
        webhook: Arc<dyn WebhookSender>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            webhook,
            webhook_url: webhook_url.into(),
        }
    }

    /// The webhook URL this pipeline delivers to
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Run one submission for a workbook
    ///
    /// Every failure mode inside the run - progress, fetch,
    /// serialization, delivery - collapses into a single [`JobFailure`]
    /// carrying the original message; the structured kind survives on
    /// the wrapper for diagnostics.
    pub async fn submit(
        &self,
        workbook_id: &WorkbookId,
        event_payload: &serde_json::Map<String, serde_json::Value>,
        progress: &dyn ProgressReporter,
    ) -> std::result::Result<JobOutcome, JobFailure> {
        self.run(workbook_id, event_payload, progress)
            .await
            .map_err(|e| {
                tracing::error!(workbook_id = %workbook_id, error = %e, "Submission failed");
                JobFailure::wrap(e)
            })
    }

    async fn run(
        &self,
        workbook_id: &WorkbookId,
        event_payload: &serde_json::Map<String, serde_json::Value>,
        progress: &dyn ProgressReporter,
    ) -> Result<JobOutcome> {
        // Awaited before any fetch: progress-before-data is an ordering
        // guarantee, even though the tick itself is advisory.
        progress
            .tick(
                10,
                &format!("Starting job to submit action to {}", self.webhook_url),
            )
            .await?;

        // Single page; upstream pagination is not handled
        let sheets = self.platform.list_sheets(workbook_id).await?;

        tracing::info!(
            workbook_id = %workbook_id,
            sheet_count = sheets.len(),
            "Collecting records for submission"
        );

        // Sequential, in sheet order: per-request upstream side effects
        // must stay observably ordered
        let mut records = serde_json::Map::new();
        for (index, sheet) in sheets.iter().enumerate() {
            let sheet_records = self.platform.list_records(&sheet.id).await?;
            records.insert(
                format!("Sheet[{index}]"),
                serde_json::to_value(sheet_records)?,
            );
        }

        let body = build_payload(event_payload, &sheets, records)?;

        let status = self.webhook.deliver(&self.webhook_url, &body).await?;

        // Strict equality: 201, 204 and redirects are rejections too
        if status != 200 {
            return Err(DeliveryError::Rejected {
                url: self.webhook_url.clone(),
                status,
            }
            .into());
        }

        tracing::info!(
            workbook_id = %workbook_id,
            sheet_count = sheets.len(),
            url = %self.webhook_url,
            "Submission delivered"
        );

        Ok(JobOutcome::success(format!(
            "Data was successfully submitted. Go check it out at {}.",
            self.webhook_url
        )))
    }
}
