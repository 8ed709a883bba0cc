//! In-memory sink.

use super::{PlanSink, StorageResult};
use crate::canvas::FloorPlan;

/// Keeps every saved plan in order, for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    plans: Vec<FloorPlan>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All plans saved so far, oldest first.
    pub fn plans(&self) -> &[FloorPlan] {
        &self.plans
    }

    pub fn last(&self) -> Option<&FloorPlan> {
        self.plans.last()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanSink for MemorySink {
    fn save(&mut self, plan: &FloorPlan) -> StorageResult<()> {
        self.plans.push(plan.clone());
        Ok(())
    }
}
