//! Event listener and dispatch
//!
//! The listener owns the registered event handlers, polls the platform's
//! event stream and dispatches each event to every handler that accepts
//! it, sequentially in registration order. One handler failing is logged
//! and never stops dispatch or the poll loop.

use crate::adapters::platform::PlatformApi;
use crate::adapters::webhook::WebhookSender;
use crate::blueprints::defaults::{default_space, default_workbook};
use crate::config::SheetflowConfig;
use crate::core::hooks::CommitHandler;
use crate::core::space::SpaceSetupHandler;
use crate::core::submit::SubmitHandler;
use crate::domain::{Event, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// A handler for platform events
///
/// `accepts` is a cheap synchronous filter; `handle` does the work.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Whether this handler wants the event
    fn accepts(&self, event: &Event) -> bool;

    /// Process the event
    async fn handle(&self, event: &Event) -> Result<()>;
}

/// Event dispatcher with a polling run loop
pub struct Listener {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl Listener {
    /// Create an empty listener
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Build the standard listener from configuration
    ///
    /// Registers the space setup handler, the submit-to-webhook handler
    /// and the commit handler with its configured hooks and constraints.
    pub fn from_config(
        platform: Arc<dyn PlatformApi>,
        webhook: Arc<dyn WebhookSender>,
        config: &SheetflowConfig,
    ) -> Self {
        let mut listener = Self::new();

        listener.register(Arc::new(SpaceSetupHandler::new(
            platform.clone(),
            default_space(),
            default_workbook(),
        )));
        listener.register(Arc::new(SubmitHandler::new(
            platform.clone(),
            webhook,
            config.webhook.url.clone(),
        )));
        listener.register(Arc::new(CommitHandler::from_config(
            platform,
            &config.hooks,
        )));

        listener
    }

    /// Register a handler
    pub fn register(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatch one event to every accepting handler
    ///
    /// Returns the number of handlers that accepted the event. Handler
    /// errors are logged, never propagated; a failed job has already
    /// been reported to the platform by the handler itself.
    pub async fn dispatch(&self, event: &Event) -> usize {
        let mut accepted = 0;

        for handler in &self.handlers {
            if !handler.accepts(event) {
                continue;
            }
            accepted += 1;

            if let Err(e) = handler.handle(event).await {
                tracing::error!(
                    topic = ?event.topic,
                    operation = event.context.operation.as_deref().unwrap_or(""),
                    error = %e,
                    "Event handler failed"
                );
            }
        }

        if accepted == 0 {
            tracing::debug!(topic = ?event.topic, "No handler for event");
        }

        accepted
    }

    /// Poll the platform's event stream until shutdown is signalled
    pub async fn run(
        &self,
        platform: Arc<dyn PlatformApi>,
        poll_interval: Duration,
        page_size: usize,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut cursor: Option<String> = None;

        tracing::info!(
            poll_interval_ms = poll_interval.as_millis() as u64,
            page_size = page_size,
            handlers = self.handlers.len(),
            "Listener started"
        );

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tracing::info!("Listener shutting down");
                        return Ok(());
                    }
                }
                _ = tokio::time::sleep(poll_interval) => {
                    match platform.poll_events(cursor.as_deref(), page_size).await {
                        Ok(page) => {
                            for event in &page.events {
                                self.dispatch(event).await;
                            }
                            if page.cursor.is_some() {
                                cursor = page.cursor;
                            }
                        }
                        Err(e) => {
                            // Transient poll failures keep the loop alive
                            tracing::warn!(error = %e, "Event poll failed");
                        }
                    }
                }
            }
        }
    }
}

impl Default for Listener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventContext, EventTopic, SheetflowError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        topic: EventTopic,
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingHandler {
        fn new(topic: EventTopic, fail: bool) -> Self {
            Self {
                topic,
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl EventHandler for CountingHandler {
        fn accepts(&self, event: &Event) -> bool {
            event.topic == self.topic
        }

        async fn handle(&self, _event: &Event) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(SheetflowError::Other("handler broke".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn event(topic: EventTopic) -> Event {
        Event {
            topic,
            created_at: None,
            payload: serde_json::Map::new(),
            context: EventContext::default(),
        }
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_accepts() {
        let job_handler = Arc::new(CountingHandler::new(EventTopic::JobReady, false));
        let commit_handler = Arc::new(CountingHandler::new(EventTopic::CommitCreated, false));

        let mut listener = Listener::new();
        listener.register(job_handler.clone());
        listener.register(commit_handler.clone());

        let accepted = listener.dispatch(&event(EventTopic::JobReady)).await;
        assert_eq!(accepted, 1);
        assert_eq!(job_handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(commit_handler.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dispatch_survives_handler_error() {
        let failing = Arc::new(CountingHandler::new(EventTopic::JobReady, true));
        let healthy = Arc::new(CountingHandler::new(EventTopic::JobReady, false));

        let mut listener = Listener::new();
        listener.register(failing.clone());
        listener.register(healthy.clone());

        let accepted = listener.dispatch(&event(EventTopic::JobReady)).await;
        assert_eq!(accepted, 2);
        assert_eq!(healthy.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dispatch_unmatched_event() {
        let listener = Listener::new();
        let accepted = listener.dispatch(&event(EventTopic::Other)).await;
        assert_eq!(accepted, 0);
    }
}
