//! Declarative platform blueprints
//!
//! Workbook, sheet, field and action declarations, serialized verbatim
//! into the platform's configuration endpoints. Blueprints are static
//! data - the one parameterized [`WorkbookBlueprint`] structure replaces
//! what would otherwise be copy-pasted per-handler config modules.

pub mod action;
pub mod defaults;
pub mod sheet;
pub mod workbook;

pub use action::{ActionBlueprint, ActionMode};
pub use sheet::{EnumOption, FieldBlueprint, FieldConfig, FieldType, SheetBlueprint};
pub use workbook::{SpaceBlueprint, WorkbookBlueprint};
