//! Workbook submission
//!
//! The submission pipeline and its surrounding plumbing: payload
//! assembly, advisory progress reporting and the job handler wiring it
//! to the event stream.

pub mod handler;
pub mod payload;
pub mod pipeline;
pub mod progress;

pub use handler::SubmitHandler;
pub use pipeline::SubmitPipeline;
pub use progress::{JobProgress, NoopProgress, ProgressReporter};
