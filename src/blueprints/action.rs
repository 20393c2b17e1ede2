//! Workbook action blueprint

use serde::{Deserialize, Serialize};

/// How the platform runs an action's job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    /// Blocks the UI until the job completes
    Foreground,
    /// Runs without blocking the UI
    Background,
}

/// A user-facing operation offered on a workbook
///
/// Creating an action with operation `submit` makes the platform emit a
/// `job:ready` event with operation `workbook:submit` when the user
/// triggers it; that string is what the job handler is registered
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBlueprint {
    /// Operation suffix; the platform prefixes the scope (`workbook:`)
    pub operation: String,

    /// Execution mode
    pub mode: ActionMode,

    /// Button label
    pub label: String,

    /// Tooltip / description text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ActionBlueprint {
    /// Create a foreground action
    pub fn foreground(operation: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            mode: ActionMode::Foreground,
            label: label.into(),
            description: None,
        }
    }

    /// Set the description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The fully-qualified job operation string for this action
    pub fn job_operation(&self) -> String {
        format!("workbook:{}", self.operation)
    }
}
