//! One open editor instance: canvas plus the identity it saves under.

use crate::canvas::{Canvas, FloorPlan};
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::storage::PlanSink;

/// Editor session bound to a branch.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub canvas: Canvas,
    branch_id: String,
    /// Plan name as typed; validated only on save.
    pub name: String,
}

impl EditorSession {
    pub fn new(branch_id: impl Into<String>, equipment_types: Vec<String>) -> Self {
        Self::with_config(branch_id, equipment_types, EditorConfig::default())
    }

    pub fn with_config(
        branch_id: impl Into<String>,
        equipment_types: Vec<String>,
        config: EditorConfig,
    ) -> Self {
        Self {
            canvas: Canvas::with_config(equipment_types, config),
            branch_id: branch_id.into(),
            name: String::new(),
        }
    }

    pub fn branch_id(&self) -> &str {
        &self.branch_id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Assemble the persisted aggregate from the current collections.
    ///
    /// The name is handed over exactly as typed.
    pub fn floor_plan(&self) -> FloorPlan {
        self.canvas.to_floor_plan(&self.branch_id, &self.name)
    }

    /// Hand the plan to `sink`. Requires a non-blank name.
    ///
    /// Editor state is left as is whether the sink succeeds or fails.
    pub fn save(&self, sink: &mut impl PlanSink) -> EditorResult<()> {
        if self.name.trim().is_empty() {
            log::warn!("Save rejected: empty plan name");
            return Err(EditorError::EmptyPlanName);
        }
        let plan = self.floor_plan();
        match sink.save(&plan) {
            Ok(()) => {
                log::info!("Saved floor plan '{}' for branch {}", plan.name, plan.branch_id);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save floor plan '{}': {}", plan.name, e);
                Err(e.into())
            }
        }
    }

    /// End the session and notify the host. Nothing is saved.
    pub fn close(self, on_close: impl FnOnce()) {
        log::debug!("Closing editor session for branch {}", self.branch_id);
        on_close();
    }
}
