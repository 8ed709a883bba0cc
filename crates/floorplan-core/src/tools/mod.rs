//! Tool system for the floor-plan editor.

use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Wall,
    Door,
    Equipment,
    Box,
    Circle,
    Triangle,
    Text,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Wall,
            ToolKind::Door,
            ToolKind::Equipment,
            ToolKind::Box,
            ToolKind::Circle,
            ToolKind::Triangle,
            ToolKind::Text,
        ]
    }

    /// Get display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::Wall => "Wall",
            ToolKind::Door => "Door",
            ToolKind::Equipment => "Equipment",
            ToolKind::Box => "Box",
            ToolKind::Circle => "Circle",
            ToolKind::Triangle => "Triangle",
            ToolKind::Text => "Text",
        }
    }
}

/// Manages the current tool, the eraser flag and the equipment type picker.
///
/// The eraser is orthogonal to the tool: switching it on overrides the tool
/// for pointer-down, switching it off resumes the remembered tool.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Whether the eraser overrides the current tool.
    erasing: bool,
    /// Equipment type names supplied by the host, in picker order.
    equipment_types: Vec<String>,
    /// Index of the selected equipment type.
    selected_type: usize,
}

impl ToolManager {
    /// Create a tool manager. The first equipment type is the default selection.
    pub fn new(equipment_types: Vec<String>) -> Self {
        Self {
            equipment_types,
            ..Self::default()
        }
    }

    /// Set the current tool. The eraser flag is left as is.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.erasing = erasing;
    }

    /// Flip the eraser flag, returning the new value.
    pub fn toggle_eraser(&mut self) -> bool {
        self.erasing = !self.erasing;
        self.erasing
    }

    pub fn equipment_types(&self) -> &[String] {
        &self.equipment_types
    }

    /// The equipment type new pins are placed with, if any types exist.
    pub fn equipment_type(&self) -> Option<&str> {
        self.equipment_types.get(self.selected_type).map(String::as_str)
    }

    /// Select the equipment type used for new pins.
    pub fn set_equipment_type(&mut self, name: &str) -> EditorResult<()> {
        let index = self
            .equipment_types
            .iter()
            .position(|t| t == name)
            .ok_or_else(|| EditorError::UnknownEquipmentType(name.to_string()))?;
        self.selected_type = index;
        Ok(())
    }
}
