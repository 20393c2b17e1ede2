//! Integration tests for the listener poll loop
//!
//! A scripted fake platform serves event pages in order so the loop's
//! cursor tracking, dispatch and graceful shutdown can be observed.

use async_trait::async_trait;
use sheetflow::adapters::platform::PlatformApi;
use sheetflow::blueprints::{SpaceBlueprint, WorkbookBlueprint};
use sheetflow::core::listener::{EventHandler, Listener};
use sheetflow::domain::{
    Event, EventContext, EventPage, EventTopic, JobId, JobOutcome, Record, Result, SheetDescriptor,
    SheetId, SpaceId, WorkbookId,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

/// Serves scripted event pages, then empty pages, recording cursors seen
struct ScriptedPlatform {
    pages: Mutex<VecDeque<EventPage>>,
    cursors: Mutex<Vec<Option<String>>>,
}

impl ScriptedPlatform {
    fn new(pages: Vec<EventPage>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            cursors: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PlatformApi for ScriptedPlatform {
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
        _space_id: &SpaceId,
        _blueprint: &WorkbookBlueprint,
    ) -> Result<WorkbookId> {
        Ok(WorkbookId::new("us_wb_created").unwrap())
    }

    async fn update_workbook(
        &self,
        _workbook_id: &WorkbookId,
        _blueprint: &WorkbookBlueprint,
    ) -> Result<()> {
        Ok(())
    }

    async fn update_space(&self, _space_id: &SpaceId, _blueprint: &SpaceBlueprint) -> Result<()> {
        Ok(())
    }

    async fn ack_job(&self, _job_id: &JobId, _message: &str) -> Result<()> {
        Ok(())
    }

    async fn update_job_progress(&self, _job_id: &JobId, _percent: u8, _message: &str) -> Result<()> {
        Ok(())
    }

    async fn complete_job(&self, _job_id: &JobId, _outcome: &JobOutcome) -> Result<()> {
        Ok(())
    }

    async fn fail_job(&self, _job_id: &JobId, _message: &str) -> Result<()> {
        Ok(())
    }

    async fn poll_events(&self, cursor: Option<&str>, _page_size: usize) -> Result<EventPage> {
        self.cursors
            .lock()
            .unwrap()
            .push(cursor.map(str::to_string));
        Ok(self.pages.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn base_url(&self) -> &str {
        "https://platform.example.com/api/v1"
    }
}

struct CountingHandler {
    calls: AtomicUsize,
}

#[async_trait]
impl EventHandler for CountingHandler {
    fn accepts(&self, event: &Event) -> bool {
        event.topic == EventTopic::JobReady
    }

    async fn handle(&self, _event: &Event) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn job_event() -> Event {
    Event {
        topic: EventTopic::JobReady,
        created_at: None,
        payload: serde_json::Map::new(),
        context: EventContext::default(),
    }
}

#[tokio::test]
async fn test_run_dispatches_and_tracks_cursor() {
    let platform = Arc::new(ScriptedPlatform::new(vec![
        EventPage {
            events: vec![job_event(), job_event()],
            cursor: Some("evt_2".to_string()),
        },
        EventPage {
            events: vec![job_event()],
            cursor: Some("evt_3".to_string()),
        },
    ]));
    let handler = Arc::new(CountingHandler {
        calls: AtomicUsize::new(0),
    });

    let mut listener = Listener::new();
    listener.register(handler.clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let stopper = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let _ = shutdown_tx.send(true);
    });

    listener
        .run(
            platform.clone(),
            Duration::from_millis(10),
            50,
            shutdown_rx,
        )
        .await
        .unwrap();
    stopper.await.unwrap();

    assert_eq!(handler.calls.load(Ordering::SeqCst), 3);

    let cursors = platform.cursors.lock().unwrap().clone();
    assert!(cursors.len() >= 2);
    assert_eq!(cursors[0], None);
    assert_eq!(cursors[1].as_deref(), Some("evt_2"));
    // Empty pages after the script carry no cursor; the last one sticks
    assert!(cursors[2..]
        .iter()
        .all(|c| c.as_deref() == Some("evt_3")));
}

#[tokio::test]
async fn test_from_config_registers_standard_handlers() {
    use sheetflow::adapters::webhook::WebhookSender;

    struct NullWebhook;

    #[async_trait]
    impl WebhookSender for NullWebhook {
        async fn deliver(&self, _url: &str, _body: &serde_json::Value) -> Result<u16> {
            Ok(200)
        }
    }

    let config: sheetflow::config::SheetflowConfig = toml::from_str(
        r#"
[platform]
base_url = "https://platform.example.com/api/v1"
api_token = "token"

[webhook]
url = "https://webhook.example.com/submissions"
"#,
    )
    .unwrap();

    let platform = Arc::new(ScriptedPlatform::new(Vec::new()));
    let listener = Listener::from_config(platform, Arc::new(NullWebhook), &config);

    // Space setup, submit and commit handlers
    assert_eq!(listener.handler_count(), 3);
}

#[tokio::test]
async fn test_run_stops_promptly_on_shutdown() {
    let platform = Arc::new(ScriptedPlatform::new(Vec::new()));
    let listener = Listener::new();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let _ = shutdown_tx.send(true);

    // A long poll interval would hang here if shutdown were not honored
    tokio::time::timeout(
        Duration::from_secs(1),
        listener.run(platform, Duration::from_secs(3600), 50, shutdown_rx),
    )
    .await
    .expect("Listener did not shut down")
    .unwrap();
}
