//! Sheet and record domain models
//!
//! A sheet is a tabular dataset with a field schema; a record is one row
//! of a sheet. Records carry per-field values plus validation messages,
//! mirroring the wire shape the platform uses for records with resolved
//! cross-sheet links.

use crate::domain::ids::{RecordId, SheetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sheet as listed by the platform, without its records
///
/// Fetched fresh per pipeline invocation and never cached; the zero-based
/// position within the fetched list is what keys the record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Sheet identifier
    pub id: SheetId,

    /// Display name
    pub name: String,

    /// URL-safe slug, used to target record hooks at a specific sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl SheetDescriptor {
    /// Create a new sheet descriptor
    pub fn new(id: SheetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
        }
    }

    /// Set the sheet slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }
}

/// Severity of a validation message attached to a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Blocks submission in the platform UI
    Error,
    /// Shown but non-blocking
    Warn,
    /// Informational only
    Info,
}

/// A validation message attached to one field of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// Message severity
    #[serde(rename = "type")]
    pub level: MessageLevel,

    /// Human-readable message shown next to the cell
    pub message: String,
}

impl ValidationMessage {
    /// Create an error-level message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            message: message.into(),
        }
    }
}

/// One cell of a record: its value plus any validation messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecordValue {
    /// The cell value; None maps to JSON null
    pub value: Option<serde_json::Value>,

    /// Validation messages for this cell
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ValidationMessage>,
}

impl RecordValue {
    /// Create a record value from a JSON value
    pub fn new(value: serde_json::Value) -> Self {
        Self {
            value: Some(value),
            messages: Vec::new(),
        }
    }
}

/// One row of a sheet, with any cross-sheet links already resolved upstream
///
/// # Examples
///
/// ```
/// use sheetflow::domain::record::Record;
/// use sheetflow::domain::ids::RecordId;
///
/// let mut record = Record::new(RecordId::new("us_rc_1").unwrap());
/// record.set("name", serde_json::json!("ada"));
/// assert_eq!(record.get_str("name"), Some("ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier
    pub id: RecordId,

    /// Field key to cell value mapping
    pub values: BTreeMap<String, RecordValue>,
}

impl Record {
    /// Create an empty record with the given identifier
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
        }
    }

    /// Get the raw JSON value of a field, if present and non-null
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key).and_then(|v| v.value.as_ref())
    }

    /// Get a field value as a string slice, if it is a JSON string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// Set a field value, preserving any existing messages on the cell
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        let entry = self.values.entry(key.into()).or_default();
        entry.value = Some(value);
    }

    /// Attach an error-level validation message to a field
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let entry = self.values.entry(key.into()).or_default();
        entry.messages.push(ValidationMessage::error(message));
    }

    /// Whether any field carries an error-level message
    pub fn has_errors(&self) -> bool {
        self.values
            .values()
            .any(|v| v.messages.iter().any(|m| m.level == MessageLevel::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::RecordId;

    fn record() -> Record {
        Record::new(RecordId::new("us_rc_1").unwrap())
    }

    #[test]
    fn test_set_and_get() {
        let mut r = record();
        r.set("name", serde_json::json!("ada"));
        assert_eq!(r.get_str("name"), Some("ada"));
        assert_eq!(r.get("missing"), None);
    }

    #[test]
    fn test_set_preserves_messages() {
        let mut r = record();
        r.add_error("name", "bad value");
        r.set("name", serde_json::json!("fixed"));
        assert_eq!(r.get_str("name"), Some("fixed"));
        assert!(r.has_errors());
    }

    #[test]
    fn test_add_error_on_missing_field() {
        let mut r = record();
        r.add_error("email", "Value must include @");
        assert!(r.has_errors());
        assert_eq!(r.get("email"), None);
    }

    #[test]
    fn test_record_serialization_shape() {
        let mut r = record();
        r.set("name", serde_json::json!("Ada"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["id"], "us_rc_1");
        assert_eq!(json["values"]["name"]["value"], "Ada");
        // no messages key when empty
        assert!(json["values"]["name"].get("messages").is_none());
    }

    #[test]
    fn test_validation_message_type_tag() {
        let msg = ValidationMessage::error("nope");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "nope");
    }

    #[test]
    fn test_sheet_descriptor_slug() {
        let sheet = SheetDescriptor::new(SheetId::new("us_sh_1").unwrap(), "Example Sheet")
            .with_slug("example-sheet");
        assert_eq!(sheet.slug.as_deref(), Some("example-sheet"));
    }
}
