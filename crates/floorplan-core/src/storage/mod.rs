//! Save collaborators for finished floor plans.
//!
//! The editor never talks to a database. Saving hands the assembled
//! [`FloorPlan`] to a [`PlanSink`] supplied by the host.

mod file;
mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use crate::canvas::FloorPlan;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Receiver of saved floor plans.
///
/// Called exactly once per successful save and never retried.
pub trait PlanSink {
    fn save(&mut self, plan: &FloorPlan) -> StorageResult<()>;
}

impl<F> PlanSink for F
where
    F: FnMut(&FloorPlan) -> StorageResult<()>,
{
    fn save(&mut self, plan: &FloorPlan) -> StorageResult<()> {
        self(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PlanData;

    #[test]
    fn test_closure_sink() {
        let mut names = Vec::new();
        let mut sink = |plan: &FloorPlan| -> StorageResult<()> {
            names.push(plan.name.clone());
            Ok(())
        };
        let plan = FloorPlan::new("b1", "Ground", PlanData::default());
        sink.save(&plan).unwrap();
        sink.save(&plan).unwrap();
        assert_eq!(names, vec!["Ground", "Ground"]);
    }

    #[test]
    fn test_closure_sink_error() {
        let mut sink = |_: &FloorPlan| -> StorageResult<()> { Err(StorageError::Other("offline".into())) };
        let err = sink.save(&FloorPlan::new("b1", "Ground", PlanData::default())).unwrap_err();
        assert_eq!(err.to_string(), "Storage error: offline");
    }
}
