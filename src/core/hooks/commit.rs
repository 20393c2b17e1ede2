//! Commit event handler
//!
//! Runs record hooks and field constraints over a sheet's records when
//! a commit lands, then writes back only the records that changed or
//! gained validation messages.

use super::capitalize::{CapitalizeHook, RecordHook};
use super::constraint::{apply_constraint, ContainsConstraint, FieldConstraint};
use crate::adapters::platform::PlatformApi;
use crate::config::HooksConfig;
use crate::core::listener::EventHandler;
use crate::domain::{Event, EventTopic, Result, SheetflowError};
use async_trait::async_trait;
use std::sync::Arc;

/// Handles `commit:created` events for one sheet slug
pub struct CommitHandler {
    platform: Arc<dyn PlatformApi>,
    sheet_slug: String,
    hooks: Vec<Box<dyn RecordHook>>,
    constraints: Vec<(String, Box<dyn FieldConstraint>)>,
}

impl CommitHandler {
    /// Create a handler for the given sheet slug with no hooks
    pub fn new(platform: Arc<dyn PlatformApi>, sheet_slug: impl Into<String>) -> Self {
        Self {
            platform,
            sheet_slug: sheet_slug.into(),
            hooks: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Wire up hooks and constraints from configuration
    pub fn from_config(platform: Arc<dyn PlatformApi>, config: &HooksConfig) -> Self {
        let mut handler = Self::new(platform, config.capitalize_sheet_slug.clone())
            .with_hook(Box::new(CapitalizeHook::new(config.capitalize_field.clone())));

        if let (Some(field), Some(needle)) = (&config.contains_field, &config.contains_needle) {
            handler = handler
                .with_constraint(field.clone(), Box::new(ContainsConstraint::new(needle.clone())));
        }

        handler
    }

    /// Add a record hook
    pub fn with_hook(mut self, hook: Box<dyn RecordHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Add a field constraint bound to a field key
    pub fn with_constraint(
        mut self,
        field: impl Into<String>,
        constraint: Box<dyn FieldConstraint>,
    ) -> Self {
        self.constraints.push((field.into(), constraint));
        self
    }
}

#[async_trait]
impl EventHandler for CommitHandler {
    fn accepts(&self, event: &Event) -> bool {
        event.topic == EventTopic::CommitCreated
            && event.context.sheet_slug.as_deref() == Some(self.sheet_slug.as_str())
    }

    async fn handle(&self, event: &Event) -> Result<()> {
        let sheet_id = event
            .context
            .sheet_id
            .clone()
            .ok_or_else(|| SheetflowError::Validation("Commit event has no sheet id".to_string()))?;

        let records = self.platform.list_records(&sheet_id).await?;
        let total = records.len();

        let mut changed = Vec::new();
        for mut record in records {
            let mut touched = false;
            for hook in &self.hooks {
                touched |= hook.apply(&mut record);
            }
            for (field, constraint) in &self.constraints {
                touched |= apply_constraint(&mut record, field, constraint.as_ref());
            }
            if touched {
                changed.push(record);
            }
        }

        tracing::info!(
            sheet_id = %sheet_id,
            sheet_slug = %self.sheet_slug,
            total = total,
            changed = changed.len(),
            "Processed commit"
        );

        self.platform.update_records(&sheet_id, &changed).await
    }
}
