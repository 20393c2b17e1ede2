//! Domain models and types for sheetflow.
//!
//! This module contains the core domain models shared across the crate:
//!
//! - **Strongly-typed identifiers** ([`WorkbookId`], [`SheetId`], [`JobId`], ...)
//! - **Sheet and record models** ([`SheetDescriptor`], [`Record`])
//! - **Events** ([`Event`], [`EventContext`], [`EventTopic`])
//! - **Error types** ([`SheetflowError`], [`PlatformError`], [`DeliveryError`],
//!   [`JobFailure`]) and the [`Result`] alias
//!
//! Identifiers use the newtype pattern so different ID kinds cannot be
//! mixed up at compile time:
//!
//! ```rust
//! use sheetflow::domain::{WorkbookId, SheetId};
//!
//! # fn example() -> Result<(), String> {
//! let workbook_id = WorkbookId::new("us_wb_123")?;
//! let sheet_id = SheetId::new("us_sh_456")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: WorkbookId = sheet_id;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod event;
pub mod ids;
pub mod job;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DeliveryError, JobFailure, JobFailureKind, PlatformError, SheetflowError};
pub use event::{Event, EventContext, EventPage, EventTopic};
pub use ids::{JobId, RecordId, SheetId, SpaceId, WorkbookId};
pub use job::JobOutcome;
pub use record::{MessageLevel, Record, RecordValue, SheetDescriptor, ValidationMessage};
pub use result::Result;
