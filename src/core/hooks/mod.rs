//! Record hooks and field constraints
//!
//! Transformations and validations applied to records as they are
//! committed, plus the commit handler that drives them.

pub mod capitalize;
pub mod commit;
pub mod constraint;

pub use capitalize::{CapitalizeHook, RecordHook};
pub use commit::CommitHandler;
pub use constraint::{apply_constraint, ContainsConstraint, FieldConstraint};
