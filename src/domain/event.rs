//! Platform event model
//!
//! Events are delivered by the platform's event stream. A job-scoped
//! event carries the operation string the job was created for (e.g.
//! `workbook:submit`), which is what handlers are registered against.

use crate::domain::ids::{JobId, SheetId, SpaceId, WorkbookId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known job operation strings
pub mod operations {
    /// Submit a workbook's contents to the configured webhook
    pub const WORKBOOK_SUBMIT: &str = "workbook:submit";
    /// Initial space setup
    pub const SPACE_CONFIGURE: &str = "space:configure";
    /// Re-apply the workbook blueprint to an existing space
    pub const SPACE_RECONFIGURE: &str = "space:reconfigure";
}

/// Event topic as delivered on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTopic {
    /// A job is ready to be worked
    #[serde(rename = "job:ready")]
    JobReady,

    /// Records were created or updated on a sheet
    #[serde(rename = "commit:created")]
    CommitCreated,

    /// Any topic this listener does not handle
    #[serde(other)]
    Other,
}

/// Scoping identifiers attached to an event
///
/// All fields are optional on the wire; which ones are present depends
/// on the topic (a commit event has a sheet, a job event has a job).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventContext {
    /// Space the event occurred in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<SpaceId>,

    /// Workbook the event is scoped to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook_id: Option<WorkbookId>,

    /// Sheet the event is scoped to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<SheetId>,

    /// Slug of the sheet, when the platform resolves it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_slug: Option<String>,

    /// Job tracking this unit of work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,

    /// Operation string of the job, e.g. `workbook:submit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

/// One event from the platform's event stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event topic
    pub topic: EventTopic,

    /// When the platform emitted the event
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Free-form payload supplied when the job was created
    #[serde(default)]
    pub payload: serde_json::Map<String, serde_json::Value>,

    /// Scoping identifiers
    #[serde(default)]
    pub context: EventContext,
}

impl Event {
    /// Whether this is a job event for the given operation
    pub fn is_job_operation(&self, operation: &str) -> bool {
        self.topic == EventTopic::JobReady
            && self.context.operation.as_deref() == Some(operation)
    }
}

/// One page of events from the platform's event stream
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPage {
    /// Events in delivery order
    pub events: Vec<Event>,

    /// Cursor to resume polling from, if the platform supplied one
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization() {
        let json = serde_json::json!({
            "topic": "job:ready",
            "createdAt": "2025-05-01T12:00:00Z",
            "payload": { "source": "ui" },
            "context": {
                "workbookId": "us_wb_1",
                "jobId": "us_jb_1",
                "operation": "workbook:submit"
            }
        });

        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.topic, EventTopic::JobReady);
        assert!(event.is_job_operation(operations::WORKBOOK_SUBMIT));
        assert_eq!(
            event.context.workbook_id.as_ref().unwrap().as_str(),
            "us_wb_1"
        );
        assert_eq!(event.payload["source"], "ui");
        assert!(event.created_at.is_some());
    }

    #[test]
    fn test_unknown_topic_deserializes_as_other() {
        let json = serde_json::json!({
            "topic": "file:uploaded",
            "context": {}
        });

        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.topic, EventTopic::Other);
    }

    #[test]
    fn test_commit_event_is_not_a_job_operation() {
        let json = serde_json::json!({
            "topic": "commit:created",
            "context": { "sheetId": "us_sh_1", "sheetSlug": "example-sheet" }
        });

        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.topic, EventTopic::CommitCreated);
        assert!(!event.is_job_operation(operations::WORKBOOK_SUBMIT));
        assert_eq!(event.context.sheet_slug.as_deref(), Some("example-sheet"));
    }

    #[test]
    fn test_missing_payload_defaults_empty() {
        let json = serde_json::json!({ "topic": "job:ready", "context": {} });
        let event: Event = serde_json::from_value(json).unwrap();
        assert!(event.payload.is_empty());
    }
}
