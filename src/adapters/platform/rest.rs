//! REST implementation of the platform API
//!
//! Thin reqwest client around the platform's HTTP endpoints. Auth is a
//! bearer token from configuration; every response is unwrapped from its
//! `data` envelope and mapped into domain types before leaving this
//! module. No reqwest types escape.

use super::client::PlatformApi;
use super::models::{
    CreatedWorkbook, DataEnvelope, EventsData, JobCompleteRequest, JobFailRequest,
    JobProgressRequest, ListSheetsResponse, RecordsData, UpdateRecordsRequest,
};
use crate::blueprints::{SpaceBlueprint, WorkbookBlueprint};
use crate::config::{PlatformConfig, SecretString};
use crate::domain::{
    EventPage, JobId, JobOutcome, PlatformError, Record, Result, SheetDescriptor, SheetId, SpaceId,
    WorkbookId,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Platform REST API client
pub struct RestPlatformClient {
    /// Base URL without a trailing slash
    base_url: String,

    /// Shared HTTP client
    client: Client,

    /// Bearer token for API authentication
    api_token: SecretString,
}

impl RestPlatformClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &PlatformConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| PlatformError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_token: config.api_token.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.api_token.expose_secret().as_ref())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = match status.as_u16() {
            401 | 403 => PlatformError::AuthenticationFailed(format!("status {status}: {body}")),
            s if s < 500 => PlatformError::ClientError {
                status: s,
                message: body,
            },
            s => PlatformError::ServerError {
                status: s,
                message: body,
            },
        };
        Err(err.into())
    }

    async fn decode<T: serde::de::DeserializeOwned>(&self, response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| PlatformError::InvalidResponse(e.to_string()).into())
    }
}

fn map_transport_error(err: &reqwest::Error) -> PlatformError {
    if err.is_timeout() {
        PlatformError::Timeout(err.to_string())
    } else {
        PlatformError::ConnectionFailed(err.to_string())
    }
}

#[async_trait]
impl PlatformApi for RestPlatformClient {
    async fn list_sheets(&self, workbook_id: &WorkbookId) -> Result<Vec<SheetDescriptor>> {
        let url = format!("{}/sheets?workbookId={}", self.base_url, workbook_id);

        tracing::debug!(workbook_id = %workbook_id, "Listing sheets");

        let response = self.send(self.client.get(&url)).await?;
        let envelope: ListSheetsResponse = self.decode(response).await?;

        tracing::debug!(
            workbook_id = %workbook_id,
            count = envelope.data.len(),
            "Fetched sheet list"
        );

        Ok(envelope.data)
    }

    async fn list_records(&self, sheet_id: &SheetId) -> Result<Vec<Record>> {
        let url = format!("{}/records?sheetId={}", self.base_url, sheet_id);

        let response = self.send(self.client.get(&url)).await?;
        let envelope: DataEnvelope<RecordsData> = self.decode(response).await?;

        tracing::debug!(
            sheet_id = %sheet_id,
            count = envelope.data.records.len(),
            "Fetched records"
        );

        Ok(envelope.data.records)
    }

    async fn update_records(&self, sheet_id: &SheetId, records: &[Record]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let url = format!("{}/records?sheetId={}", self.base_url, sheet_id);
        let body = UpdateRecordsRequest { records };

        self.send(self.client.put(&url).json(&body)).await?;

        tracing::debug!(sheet_id = %sheet_id, count = records.len(), "Updated records");

        Ok(())
    }

    async fn create_workbook(
        &self,
        space_id: &SpaceId,
        blueprint: &WorkbookBlueprint,
    ) -> Result<WorkbookId> {
        let url = format!("{}/workbooks?spaceId={}", self.base_url, space_id);

        let response = self.send(self.client.post(&url).json(blueprint)).await?;
        let envelope: DataEnvelope<CreatedWorkbook> = self.decode(response).await?;

        tracing::info!(
            space_id = %space_id,
            workbook_id = %envelope.data.id,
            name = %blueprint.name,
            "Created workbook"
        );

        Ok(envelope.data.id)
    }

    async fn update_workbook(
        &self,
        workbook_id: &WorkbookId,
        blueprint: &WorkbookBlueprint,
    ) -> Result<()> {
        let url = format!("{}/workbooks/{}", self.base_url, workbook_id);

        self.send(self.client.patch(&url).json(blueprint)).await?;

        tracing::info!(workbook_id = %workbook_id, "Reapplied workbook blueprint");

        Ok(())
    }

    async fn update_space(&self, space_id: &SpaceId, blueprint: &SpaceBlueprint) -> Result<()> {
        let url = format!("{}/spaces/{}", self.base_url, space_id);

        self.send(self.client.patch(&url).json(blueprint)).await?;

        tracing::info!(space_id = %space_id, name = %blueprint.name, "Applied space blueprint");

        Ok(())
    }

    async fn ack_job(&self, job_id: &JobId, message: &str) -> Result<()> {
        let url = format!("{}/jobs/{}/ack", self.base_url, job_id);
        let body = JobProgressRequest {
            progress: 0,
            info: message,
        };

        self.send(self.client.post(&url).json(&body)).await?;
        Ok(())
    }

    async fn update_job_progress(&self, job_id: &JobId, percent: u8, message: &str) -> Result<()> {
        let url = format!("{}/jobs/{}/progress", self.base_url, job_id);
        let body = JobProgressRequest {
            progress: percent.min(100),
            info: message,
        };

        self.send(self.client.patch(&url).json(&body)).await?;
        Ok(())
    }

    async fn complete_job(&self, job_id: &JobId, outcome: &JobOutcome) -> Result<()> {
        let url = format!("{}/jobs/{}/complete", self.base_url, job_id);
        let body = JobCompleteRequest { outcome };

        self.send(self.client.post(&url).json(&body)).await?;

        tracing::info!(job_id = %job_id, "Completed job");

        Ok(())
    }

    async fn fail_job(&self, job_id: &JobId, message: &str) -> Result<()> {
        let url = format!("{}/jobs/{}/fail", self.base_url, job_id);
        let body = JobFailRequest {
            outcome: JobOutcome::success(message),
        };

        self.send(self.client.post(&url).json(&body)).await?;

        tracing::warn!(job_id = %job_id, message = %message, "Failed job");

        Ok(())
    }

    async fn poll_events(&self, cursor: Option<&str>, page_size: usize) -> Result<EventPage> {
        let mut url = format!("{}/events?pageSize={}", self.base_url, page_size);
        if let Some(cursor) = cursor {
            url.push_str(&format!("&since={cursor}"));
        }

        let response = self.send(self.client.get(&url)).await?;
        let envelope: DataEnvelope<EventsData> = self.decode(response).await?;

        Ok(EventPage {
            events: envelope.data.events,
            cursor: envelope.data.cursor,
        })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
