//! Platform API wire models
//!
//! Request and response structures for the platform's REST API. The
//! platform envelopes every response body under a `data` key; these
//! models unwrap that envelope before anything crosses into the domain
//! layer.

use crate::domain::{Event, JobOutcome, Record, SheetDescriptor, WorkbookId};
use serde::{Deserialize, Serialize};

/// Generic `{ "data": ... }` response envelope
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// The enveloped body
    pub data: T,
}

/// Body of `GET /records?sheetId=`
///
/// Records arrive one level deeper than sheets: `data.records`.
#[derive(Debug, Deserialize)]
pub struct RecordsData {
    /// Records in sheet order, links resolved
    pub records: Vec<Record>,
}

/// Body of `POST /workbooks`
#[derive(Debug, Deserialize)]
pub struct CreatedWorkbook {
    /// Identifier of the newly created workbook
    pub id: WorkbookId,
}

/// Body of `GET /events`
#[derive(Debug, Deserialize)]
pub struct EventsData {
    /// Events in delivery order
    #[serde(default)]
    pub events: Vec<Event>,

    /// Cursor to resume from on the next poll
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Request body for `PUT /records?sheetId=`
#[derive(Debug, Serialize)]
pub struct UpdateRecordsRequest<'a> {
    /// Records to overwrite, addressed by their ids
    pub records: &'a [Record],
}

/// Request body for job acknowledgement and progress updates
#[derive(Debug, Serialize)]
pub struct JobProgressRequest<'a> {
    /// Progress percentage, 0-100
    pub progress: u8,

    /// Display message for the job UI
    pub info: &'a str,
}

/// Request body for `POST /jobs/{id}/complete`
#[derive(Debug, Serialize)]
pub struct JobCompleteRequest<'a> {
    /// Terminal success outcome
    pub outcome: &'a JobOutcome,
}

/// Request body for `POST /jobs/{id}/fail`
#[derive(Debug, Serialize)]
pub struct JobFailRequest {
    /// Terminal failure outcome
    pub outcome: JobOutcome,
}

/// Convenience alias: sheets arrive as `{ "data": [ ...sheets ] }`
pub type ListSheetsResponse = DataEnvelope<Vec<SheetDescriptor>>;
