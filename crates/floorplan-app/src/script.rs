//! Recorded editor sessions.
//!
//! A script stands in for the browser host: it names the branch and the
//! equipment types, fixes the canvas size, and lists the user's actions.

use floorplan_core::input::Modifiers;
use floorplan_core::tools::ToolKind;
use serde::{Deserialize, Serialize};

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    700
}

/// Session parameters plus the recorded steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub branch_id: String,
    #[serde(default)]
    pub equipment_types: Vec<String>,
    /// Canvas size at mount.
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Tool { tool: ToolKind },
    Eraser { on: bool },
    EquipmentType { name: String },
    TextDraft { text: String },
    TextConfirm,
    TextCancel,
    Undo,
    Redo,
    /// Edit the plan name field.
    Name { name: String },
    Save,
    Export,
    Close,
}
