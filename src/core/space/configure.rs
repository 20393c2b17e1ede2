//! Space setup handlers
//!
//! One parameterized handler covers both initial space configuration and
//! later reconfiguration: the same workbook blueprint is either created
//! fresh or re-applied to the existing workbook. Initial configuration
//! also names the space itself from a space blueprint.

use crate::adapters::platform::PlatformApi;
use crate::blueprints::{SpaceBlueprint, WorkbookBlueprint};
use crate::core::listener::EventHandler;
use crate::domain::event::operations;
use crate::domain::{Event, JobFailure, JobId, JobOutcome, Result, SheetflowError, SpaceId};
use async_trait::async_trait;
use std::sync::Arc;

/// Handles `job:ready` events for `space:configure` and `space:reconfigure`
pub struct SpaceSetupHandler {
    platform: Arc<dyn PlatformApi>,
    space: SpaceBlueprint,
    blueprint: WorkbookBlueprint,
}

impl SpaceSetupHandler {
    /// Create a handler applying the given space and workbook blueprints
    pub fn new(
        platform: Arc<dyn PlatformApi>,
        space: SpaceBlueprint,
        blueprint: WorkbookBlueprint,
    ) -> Self {
        Self {
            platform,
            space,
            blueprint,
        }
    }

    async fn run(&self, event: &Event, space_id: &SpaceId, job_id: &JobId) -> Result<JobOutcome> {
        self.platform
            .update_job_progress(job_id, 10, "Applying workbook blueprint")
            .await?;

        // Reconfiguration re-applies the blueprint in place when the
        // event names an existing workbook; otherwise it falls back to
        // creating one, same as initial configuration
        let reconfigure = event.is_job_operation(operations::SPACE_RECONFIGURE);
        match (&event.context.workbook_id, reconfigure) {
            (Some(workbook_id), true) => {
                self.platform
                    .update_workbook(workbook_id, &self.blueprint)
                    .await?;
                Ok(JobOutcome::success(format!(
                    "Workbook {} reconfigured",
                    self.blueprint.name
                )))
            }
            _ => {
                self.platform.update_space(space_id, &self.space).await?;
                let workbook_id = self
                    .platform
                    .create_workbook(space_id, &self.blueprint)
                    .await?;
                tracing::info!(
                    space_id = %space_id,
                    workbook_id = %workbook_id,
                    "Space configured"
                );
                Ok(JobOutcome::success(format!(
                    "Space configured with workbook {}",
                    self.blueprint.name
                )))
            }
        }
    }
}

#[async_trait]
impl EventHandler for SpaceSetupHandler {
    fn accepts(&self, event: &Event) -> bool {
        event.is_job_operation(operations::SPACE_CONFIGURE)
            || event.is_job_operation(operations::SPACE_RECONFIGURE)
    }

    async fn handle(&self, event: &Event) -> Result<()> {
        let job_id = event
            .context
            .job_id
            .clone()
            .ok_or_else(|| SheetflowError::Validation("Space event has no job id".to_string()))?;
        let space_id = event
            .context
            .space_id
            .clone()
            .ok_or_else(|| SheetflowError::Validation("Space event has no space id".to_string()))?;

        self.platform
            .ack_job(&job_id, "Accepted space setup job")
            .await?;

        match self.run(event, &space_id, &job_id).await {
            Ok(outcome) => {
                self.platform.complete_job(&job_id, &outcome).await?;
                Ok(())
            }
            Err(e) => {
                let failure = JobFailure::wrap(e);
                self.platform
                    .fail_job(&job_id, &failure.to_string())
                    .await?;
                Err(failure.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprints::defaults::{default_space, default_workbook};
    use crate::domain::{
        EventContext, EventPage, EventTopic, PlatformError, Record, SheetDescriptor, SheetId,
        WorkbookId,
    };
    use std::sync::Mutex;

    struct BlueprintPlatform {
        calls: Mutex<Vec<String>>,
        fail_create: bool,
    }

    impl BlueprintPlatform {
        fn new(fail_create: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_create,
            }
        }

        fn log(&self, entry: impl Into<String>) {
            self.calls.lock().unwrap().push(entry.into());
        }
    }

    #[async_trait]
    impl PlatformApi for BlueprintPlatform {
        async fn list_sheets(&self, _workbook_id: &WorkbookId) -> Result<Vec<SheetDescriptor>> {
            Ok(Vec::new())
        }

        async fn list_records(&self, _sheet_id: &SheetId) -> Result<Vec<Record>> {
            Ok(Vec::new())
        }

        async fn update_records(&self, _sheet_id: &SheetId, _records: &[Record]) -> Result<()> {
            Ok(())
        }

        async fn create_workbook(
            &self,
            space_id: &SpaceId,
            _blueprint: &WorkbookBlueprint,
        ) -> Result<WorkbookId> {
            self.log(format!("create_workbook:{space_id}"));
            if self.fail_create {
                return Err(PlatformError::ServerError {
                    status: 500,
                    message: "boom".to_string(),
                }
                .into());
            }
            Ok(WorkbookId::new("us_wb_new").unwrap())
        }

        async fn update_workbook(
            &self,
            workbook_id: &WorkbookId,
            _blueprint: &WorkbookBlueprint,
        ) -> Result<()> {
            self.log(format!("update_workbook:{workbook_id}"));
            Ok(())
        }

        async fn update_space(
            &self,
            space_id: &SpaceId,
            blueprint: &SpaceBlueprint,
        ) -> Result<()> {
            self.log(format!("update_space:{space_id}:{}", blueprint.name));
            Ok(())
        }

        async fn ack_job(&self, job_id: &JobId, _message: &str) -> Result<()> {
            self.log(format!("ack_job:{job_id}"));
            Ok(())
        }

        async fn update_job_progress(
            &self,
            job_id: &JobId,
            percent: u8,
            _message: &str,
        ) -> Result<()> {
            self.log(format!("progress:{job_id}:{percent}"));
            Ok(())
        }

        async fn complete_job(&self, job_id: &JobId, _outcome: &JobOutcome) -> Result<()> {
            self.log(format!("complete_job:{job_id}"));
            Ok(())
        }

        async fn fail_job(&self, job_id: &JobId, message: &str) -> Result<()> {
            self.log(format!("fail_job:{job_id}:{message}"));
            Ok(())
        }

        async fn poll_events(&self, _cursor: Option<&str>, _page_size: usize) -> Result<EventPage> {
            Ok(EventPage::default())
        }

        fn base_url(&self) -> &str {
            "https://platform.example.com"
        }
    }

    fn space_event(operation: &str, workbook_id: Option<&str>) -> Event {
        Event {
            topic: EventTopic::JobReady,
            created_at: None,
            payload: serde_json::Map::new(),
            context: EventContext {
                space_id: Some(SpaceId::new("us_sp_1").unwrap()),
                job_id: Some(JobId::new("us_jb_1").unwrap()),
                workbook_id: workbook_id.map(|id| WorkbookId::new(id).unwrap()),
                operation: Some(operation.to_string()),
                ..EventContext::default()
            },
        }
    }

    #[test]
    fn test_accepts_both_setup_operations() {
        let platform = Arc::new(BlueprintPlatform::new(false));
        let handler = SpaceSetupHandler::new(platform, default_space(), default_workbook());

        assert!(handler.accepts(&space_event(operations::SPACE_CONFIGURE, None)));
        assert!(handler.accepts(&space_event(operations::SPACE_RECONFIGURE, Some("us_wb_1"))));
        assert!(!handler.accepts(&space_event(operations::WORKBOOK_SUBMIT, None)));
    }

    #[tokio::test]
    async fn test_configure_creates_workbook() {
        let platform = Arc::new(BlueprintPlatform::new(false));
        let handler = SpaceSetupHandler::new(platform.clone(), default_space(), default_workbook());

        handler
            .handle(&space_event(operations::SPACE_CONFIGURE, None))
            .await
            .unwrap();

        let calls = platform.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                "ack_job:us_jb_1",
                "progress:us_jb_1:10",
                "update_space:us_sp_1:Sheetflow Space",
                "create_workbook:us_sp_1",
                "complete_job:us_jb_1",
            ]
        );
    }

    #[tokio::test]
    async fn test_reconfigure_updates_existing_workbook() {
        let platform = Arc::new(BlueprintPlatform::new(false));
        let handler = SpaceSetupHandler::new(platform.clone(), default_space(), default_workbook());

        handler
            .handle(&space_event(operations::SPACE_RECONFIGURE, Some("us_wb_1")))
            .await
            .unwrap();

        let calls = platform.calls.lock().unwrap().clone();
        assert!(calls.contains(&"update_workbook:us_wb_1".to_string()));
        assert!(!calls.iter().any(|c| c.starts_with("create_workbook")));
        assert!(!calls.iter().any(|c| c.starts_with("update_space")));
    }

    #[tokio::test]
    async fn test_create_failure_fails_the_job() {
        let platform = Arc::new(BlueprintPlatform::new(true));
        let handler = SpaceSetupHandler::new(platform.clone(), default_space(), default_workbook());

        let err = handler
            .handle(&space_event(operations::SPACE_CONFIGURE, None))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Job failed: "));

        let calls = platform.calls.lock().unwrap().clone();
        assert!(calls
            .last()
            .unwrap()
            .starts_with("fail_job:us_jb_1:Job failed: "));
    }

    #[tokio::test]
    async fn test_missing_space_id_is_a_validation_error() {
        let platform = Arc::new(BlueprintPlatform::new(false));
        let handler = SpaceSetupHandler::new(platform, default_space(), default_workbook());

        let mut event = space_event(operations::SPACE_CONFIGURE, None);
        event.context.space_id = None;

        let err = handler.handle(&event).await.unwrap_err();
        assert!(matches!(err, SheetflowError::Validation(_)));
    }
}
