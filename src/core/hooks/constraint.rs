//! External field constraints
//!
//! A constraint validates one field value and attaches an error message
//! to the record on violation. Null, missing and empty-string values
//! always pass; requiring a value is the schema's job, not the
//! constraint's.

use crate::domain::Record;

/// Validation applied to one field of every committed record
pub trait FieldConstraint: Send + Sync {
    /// Check a non-empty value; return an error message on violation
    fn check(&self, value: &serde_json::Value) -> Option<String>;
}

/// Requires the stringified value to contain a configured substring
pub struct ContainsConstraint {
    needle: String,
}

impl ContainsConstraint {
    /// Create a constraint requiring the given substring
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }
}

impl FieldConstraint for ContainsConstraint {
    fn check(&self, value: &serde_json::Value) -> Option<String> {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if text.contains(&self.needle) {
            None
        } else {
            Some(format!("Value must include {}", self.needle))
        }
    }
}

/// Run a constraint against one field of a record
///
/// Attaches an error message on violation and returns whether the
/// record was modified.
pub fn apply_constraint(
    record: &mut Record,
    field: &str,
    constraint: &dyn FieldConstraint,
) -> bool {
    let message = match record.get(field) {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(value) => constraint.check(value),
    };

    match message {
        Some(msg) => {
            record.add_error(field, msg);
            true
        }
        None => false,
    }
}
