//! Workbook and space blueprints

use super::action::ActionBlueprint;
use super::sheet::SheetBlueprint;
use serde::{Deserialize, Serialize};

/// Declarative configuration for one workbook
///
/// The serialized form of this struct is the body of the platform's
/// workbook-creation call. One parameterized structure covers both
/// initial configuration and reconfiguration; there are no per-handler
/// blueprint variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbookBlueprint {
    /// Display name
    pub name: String,

    /// Sheets in display order
    pub sheets: Vec<SheetBlueprint>,

    /// Actions offered on the workbook
    pub actions: Vec<ActionBlueprint>,
}

impl WorkbookBlueprint {
    /// Create a workbook blueprint
    pub fn new(
        name: impl Into<String>,
        sheets: Vec<SheetBlueprint>,
        actions: Vec<ActionBlueprint>,
    ) -> Self {
        Self {
            name: name.into(),
            sheets,
            actions,
        }
    }
}

/// Declarative configuration for the hosting space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceBlueprint {
    /// Display name
    pub name: String,

    /// Free-form metadata attached to the space
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl SpaceBlueprint {
    /// Create a space blueprint with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: serde_json::Map::new(),
        }
    }
}
