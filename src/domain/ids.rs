//! Domain identifier types with validation
//!
//! Newtype wrappers for platform identifiers. Each type ensures the
//! identifier is non-empty and prevents mixing different ID kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workbook identifier newtype wrapper
///
/// Identifies a named collection of sheets on the import platform.
/// Supplied by the triggering event, never minted locally.
///
/// # Examples
///
/// ```
/// use sheetflow::domain::ids::WorkbookId;
/// use std::str::FromStr;
///
/// let workbook_id = WorkbookId::from_str("us_wb_6f2a91c4").unwrap();
/// assert_eq!(workbook_id.as_str(), "us_wb_6f2a91c4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkbookId(String);

impl WorkbookId {
    /// Creates a new WorkbookId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Workbook ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the workbook ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WorkbookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkbookId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for WorkbookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sheet identifier newtype wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetId(String);

impl SheetId {
    /// Creates a new SheetId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Sheet ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the sheet ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SheetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SheetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Space identifier newtype wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(String);

impl SpaceId {
    /// Creates a new SpaceId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Space ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the space ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpaceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SpaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Job identifier newtype wrapper
///
/// Identifies an asynchronous unit of work tracked by the platform's
/// job system. Used for acknowledgement, progress ticks and terminal
/// completion or failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    /// Creates a new JobId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Job ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the job ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Record identifier newtype wrapper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Record ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the record ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_id_valid() {
        let id = WorkbookId::new("us_wb_123").unwrap();
        assert_eq!(id.as_str(), "us_wb_123");
        assert_eq!(id.to_string(), "us_wb_123");
    }

    #[test]
    fn test_workbook_id_empty() {
        assert!(WorkbookId::new("").is_err());
        assert!(WorkbookId::new("   ").is_err());
    }

    #[test]
    fn test_sheet_id_from_str() {
        let id = SheetId::from_str("us_sh_456").unwrap();
        assert_eq!(id.as_str(), "us_sh_456");
    }

    #[test]
    fn test_job_id_empty() {
        assert!(JobId::new("").is_err());
    }

    #[test]
    fn test_ids_serde_roundtrip() {
        let id = WorkbookId::new("us_wb_123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"us_wb_123\"");
        let back: WorkbookId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new("us_rc_789").unwrap();
        assert_eq!(format!("{id}"), "us_rc_789");
    }
}
