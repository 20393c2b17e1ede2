//! Platform API trait definition
//!
//! This trait abstracts the import platform's REST API behind one seam
//! so the pipeline, handlers and listener can be exercised against fakes
//! in tests without an HTTP stack.

use crate::blueprints::{SpaceBlueprint, WorkbookBlueprint};
use crate::domain::{
    EventPage, JobId, JobOutcome, Record, Result, SheetDescriptor, SheetId, SpaceId, WorkbookId,
};
use async_trait::async_trait;

/// Interface to the import platform's REST API
///
/// All listing calls return a single response page; the platform's
/// pagination is deliberately not handled (large workbooks would be
/// silently truncated, a known limitation of the submission contract).
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// List all sheets of a workbook, in the platform's canonical order
    ///
    /// The zero-based position within the returned list is what keys the
    /// submission payload's record collection.
    async fn list_sheets(&self, workbook_id: &WorkbookId) -> Result<Vec<SheetDescriptor>>;

    /// Fetch all records of a sheet, with cross-sheet links resolved upstream
    async fn list_records(&self, sheet_id: &SheetId) -> Result<Vec<Record>>;

    /// Write back modified records to a sheet
    async fn update_records(&self, sheet_id: &SheetId, records: &[Record]) -> Result<()>;

    /// Create a workbook in a space from a blueprint, returning its id
    async fn create_workbook(
        &self,
        space_id: &SpaceId,
        blueprint: &WorkbookBlueprint,
    ) -> Result<WorkbookId>;

    /// Re-apply a blueprint to an existing workbook
    async fn update_workbook(
        &self,
        workbook_id: &WorkbookId,
        blueprint: &WorkbookBlueprint,
    ) -> Result<()>;

    /// Apply a space blueprint (display name and metadata) to a space
    async fn update_space(&self, space_id: &SpaceId, blueprint: &SpaceBlueprint) -> Result<()>;

    /// Acknowledge a job, marking it as being worked
    async fn ack_job(&self, job_id: &JobId, message: &str) -> Result<()>;

    /// Report job progress (percent 0-100 plus display message)
    async fn update_job_progress(&self, job_id: &JobId, percent: u8, message: &str) -> Result<()>;

    /// Complete a job with a success outcome
    async fn complete_job(&self, job_id: &JobId, outcome: &JobOutcome) -> Result<()>;

    /// Fail a job with a terminal message
    async fn fail_job(&self, job_id: &JobId, message: &str) -> Result<()>;

    /// Fetch the next page of events after the given cursor
    async fn poll_events(&self, cursor: Option<&str>, page_size: usize) -> Result<EventPage>;

    /// Base URL of the platform API
    fn base_url(&self) -> &str;
}
