//! Floor-plan editor application shell
//!
//! Replays recorded editing sessions headlessly: saved plans are written as
//! JSON and exports as JPEG files.

pub mod app;
pub mod script;

pub use app::{App, AppError, RunSummary, run_files};
pub use script::{Script, Step};
