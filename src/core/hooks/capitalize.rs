//! Record hooks
//!
//! A record hook rewrites record values as they are committed. Hooks
//! run before constraints and report whether they touched the record,
//! so only modified records are written back to the platform.

use crate::domain::Record;

/// A transformation applied to every committed record of a sheet
pub trait RecordHook: Send + Sync {
    /// Apply the hook; return true if the record was modified
    fn apply(&self, record: &mut Record) -> bool;
}

/// Capitalizes the first character of a string field
///
/// Empty or missing values are left alone, and the field is only
/// rewritten when the capitalized form actually differs.
pub struct CapitalizeHook {
    field: String,
}

impl CapitalizeHook {
    /// Create a hook for the given field key
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl RecordHook for CapitalizeHook {
    fn apply(&self, record: &mut Record) -> bool {
        let new_value = match record.get_str(&self.field) {
            Some(current) if !current.is_empty() => {
                let capitalized = capitalize_first(current);
                if capitalized != current {
                    Some(capitalized)
                } else {
                    None
                }
            }
            _ => None,
        };

        match new_value {
            Some(value) => {
                record.set(self.field.clone(), serde_json::Value::String(value));
                true
            }
            None => false,
        }
    }
}

/// Uppercase the first character, leave the rest untouched
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
