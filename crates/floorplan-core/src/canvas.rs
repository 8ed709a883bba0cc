//! Floor-plan model and the editor state machine.

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::history::{History, Snapshot};
use crate::input::{EventOutcome, KeyCommand, KeyEvent, PointerEvent};
use crate::selection::{self, DragEffect, Selection};
use crate::shapes::{Circle, Door, Equipment, Point, Rectangle, Text, Triangle, Wall};
use crate::tools::{ToolKind, ToolManager};
use serde::{Deserialize, Serialize};

/// The seven entity collections of a floor plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanData {
    pub equipment: Vec<Equipment>,
    pub walls: Vec<Wall>,
    pub boxes: Vec<Rectangle>,
    pub circles: Vec<Circle>,
    pub triangles: Vec<Triangle>,
    pub doors: Vec<Door>,
    pub texts: Vec<Text>,
}

impl PlanData {
    /// Total number of entities across all collections.
    pub fn len(&self) -> usize {
        self.equipment.len()
            + self.walls.len()
            + self.boxes.len()
            + self.circles.len()
            + self.triangles.len()
            + self.doors.len()
            + self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The aggregate handed to the save collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Opaque identifier of the branch the plan belongs to.
    pub branch_id: String,
    pub name: String,
    pub data: PlanData,
}

impl FloorPlan {
    pub fn new(branch_id: impl Into<String>, name: impl Into<String>, data: PlanData) -> Self {
        Self {
            branch_id: branch_id.into(),
            name: name.into(),
            data,
        }
    }

    /// Serialize the plan to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a plan from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An open text prompt waiting for confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub position: Point,
    pub draft: String,
}

/// Runtime editor state (not persisted).
///
/// Every handler runs to completion, including history recording, before it
/// returns, so snapshots are never taken of a half-applied action.
#[derive(Debug, Clone)]
pub struct Canvas {
    data: PlanData,
    /// Wall polyline under construction.
    scratch_wall: Vec<Point>,
    tools: ToolManager,
    selection: Selection,
    /// History entry created by the gesture in progress, amended on pointer-up.
    gesture_entry: Option<usize>,
    pending_text: Option<TextEntry>,
    history: History,
    /// Number the next equipment pin receives. Never rewound.
    next_equipment_number: u32,
    config: EditorConfig,
}

impl Canvas {
    /// Create an empty canvas with default configuration.
    pub fn new(equipment_types: Vec<String>) -> Self {
        Self::with_config(equipment_types, EditorConfig::default())
    }

    /// Create an empty canvas.
    pub fn with_config(equipment_types: Vec<String>, config: EditorConfig) -> Self {
        Self {
            data: PlanData::default(),
            scratch_wall: Vec::new(),
            tools: ToolManager::new(equipment_types),
            selection: Selection::None,
            gesture_entry: None,
            pending_text: None,
            history: History::new(Snapshot::default(), config.max_history),
            next_equipment_number: 1,
            config,
        }
    }

    pub fn data(&self) -> &PlanData {
        &self.data
    }

    pub fn scratch_wall(&self) -> &[Point] {
        &self.scratch_wall
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_text(&self) -> Option<&TextEntry> {
        self.pending_text.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.current_tool
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    pub fn is_erasing(&self) -> bool {
        self.tools.is_erasing()
    }

    pub fn next_equipment_number(&self) -> u32 {
        self.next_equipment_number
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Build the persisted aggregate from the current collections.
    pub fn to_floor_plan(&self, branch_id: &str, name: &str) -> FloorPlan {
        FloorPlan::new(branch_id, name, self.data.clone())
    }

    // --- Toolbar actions ---

    /// Set the current tool. Ends any drag in progress; an open wall stays open.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.finish_gesture();
        self.tools.set_tool(tool);
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        self.finish_gesture();
        self.tools.set_erasing(erasing);
    }

    /// Flip the eraser, returning the new state.
    pub fn toggle_eraser(&mut self) -> bool {
        self.finish_gesture();
        self.tools.toggle_eraser()
    }

    pub fn set_equipment_type(&mut self, name: &str) -> EditorResult<()> {
        self.tools.set_equipment_type(name)
    }

    // --- Pointer input ---

    /// Dispatch a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> EditorResult<EventOutcome> {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => Ok(self.pointer_move(position)),
            PointerEvent::Up { position } => Ok(self.pointer_up(position)),
        }
    }

    /// Pointer pressed. Ignored while a text prompt is open.
    pub fn pointer_down(&mut self, point: Point) -> EditorResult<EventOutcome> {
        if self.pending_text.is_some() {
            return Ok(EventOutcome::Ignored);
        }
        self.finish_gesture();

        if self.tools.is_erasing() {
            return Ok(self.erase_at(point));
        }

        let outcome = match self.tools.current_tool {
            ToolKind::Wall => {
                self.scratch_wall.push(point);
                self.record()
            }
            ToolKind::Door => {
                self.data.doors.push(Door::new(point));
                self.record()
            }
            ToolKind::Box => {
                // The box itself appears on the first pointer-move, which
                // amends this entry along with the rest of the drag.
                self.selection = Selection::DraggingBox {
                    anchor: point,
                    index: None,
                };
                self.record_gesture()
            }
            ToolKind::Circle => {
                self.data.circles.push(Circle::new(point, self.config.circle_radius));
                self.selection = Selection::ResizingCircle(self.data.circles.len() - 1);
                self.record_gesture()
            }
            ToolKind::Triangle => {
                self.data.triangles.push(Triangle::new(point, self.config.triangle_size));
                self.selection = Selection::ResizingTriangle(self.data.triangles.len() - 1);
                self.record_gesture()
            }
            ToolKind::Equipment => {
                let Some(kind) = self.tools.equipment_type() else {
                    log::warn!("Equipment placement rejected: no equipment type available");
                    return Err(EditorError::NoEquipmentType);
                };
                let pin = Equipment::new(point, kind, self.next_equipment_number);
                self.next_equipment_number += 1;
                self.data.equipment.push(pin);
                self.record()
            }
            ToolKind::Text => {
                self.pending_text = Some(TextEntry {
                    position: point,
                    draft: String::new(),
                });
                EventOutcome::Changed
            }
        };
        Ok(outcome)
    }

    /// Pointer moved. Only affects the drag or resize in progress.
    pub fn pointer_move(&mut self, point: Point) -> EventOutcome {
        match selection::apply_drag(&mut self.selection, &mut self.data, point) {
            DragEffect::None => EventOutcome::Ignored,
            DragEffect::Created | DragEffect::Updated => EventOutcome::Changed,
        }
    }

    /// Pointer released. Ends the drag or resize without a new history entry.
    pub fn pointer_up(&mut self, _point: Point) -> EventOutcome {
        if self.finish_gesture() {
            EventOutcome::Changed
        } else {
            EventOutcome::Ignored
        }
    }

    /// Remove the first equipment pin within the eraser radius.
    fn erase_at(&mut self, point: Point) -> EventOutcome {
        match selection::find_equipment_near(&self.data.equipment, point, self.config.eraser_radius) {
            Some(index) => {
                let removed = self.data.equipment.remove(index);
                log::debug!("Erased equipment #{} ({})", removed.number, removed.kind);
                self.record()
            }
            None => EventOutcome::Ignored,
        }
    }

    // --- Keyboard input ---

    /// Dispatch a key press.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> EventOutcome {
        match event.command() {
            Some(KeyCommand::CommitWall) => self.commit_wall(),
            Some(KeyCommand::Undo) => outcome_of(self.undo()),
            Some(KeyCommand::Redo) => outcome_of(self.redo()),
            None => EventOutcome::Ignored,
        }
    }

    /// Close the in-progress wall. Polylines with fewer than two points are
    /// discarded, but the discard is still a recorded action.
    pub fn commit_wall(&mut self) -> EventOutcome {
        if self.scratch_wall.is_empty() {
            return EventOutcome::Ignored;
        }
        self.finish_gesture();

        let points = std::mem::take(&mut self.scratch_wall);
        match Wall::from_points(points) {
            Some(wall) => self.data.walls.push(wall),
            None => log::debug!("Discarded single-point wall"),
        }
        self.record()
    }

    // --- Text entry ---

    /// Replace the draft of the open text prompt.
    pub fn set_text_draft(&mut self, draft: &str) -> EditorResult<()> {
        let entry = self.pending_text.as_mut().ok_or(EditorError::NoTextEntry)?;
        entry.draft = draft.to_string();
        Ok(())
    }

    /// Place the drafted text. Blank drafts are rejected and the prompt stays open.
    pub fn confirm_text(&mut self) -> EditorResult<EventOutcome> {
        let entry = self.pending_text.as_ref().ok_or(EditorError::NoTextEntry)?;
        let Some(text) = Text::new(entry.position, &entry.draft) else {
            log::warn!("Text rejected: empty content");
            return Err(EditorError::EmptyText);
        };
        self.pending_text = None;
        self.finish_gesture();
        self.data.texts.push(text);
        Ok(self.record())
    }

    /// Close the text prompt without placing anything.
    pub fn cancel_text(&mut self) -> bool {
        self.pending_text.take().is_some()
    }

    // --- History ---

    /// Restore the previous snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        match self.history.undo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot. Returns false at the newest entry.
    pub fn redo(&mut self) -> bool {
        self.finish_gesture();
        match self.history.redo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            data: self.data.clone(),
            scratch_wall: self.scratch_wall.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.data = snapshot.data;
        self.scratch_wall = snapshot.scratch_wall;
    }

    /// Single recording path for every discrete action.
    fn record(&mut self) -> EventOutcome {
        self.history.push(self.snapshot());
        EventOutcome::Recorded
    }

    /// Record an action whose geometry keeps changing until pointer-up.
    fn record_gesture(&mut self) -> EventOutcome {
        let outcome = self.record();
        self.gesture_entry = Some(self.history.index());
        outcome
    }

    /// Fold the final geometry of the gesture into its history entry and
    /// clear the selection. Returns whether a gesture was active.
    fn finish_gesture(&mut self) -> bool {
        if let Some(index) = self.gesture_entry {
            let snapshot = self.snapshot();
            self.history.amend(index, snapshot);
        }
        self.end_gesture()
    }

    /// Clear the selection without touching history.
    fn end_gesture(&mut self) -> bool {
        self.gesture_entry = None;
        let was_active = self.selection.is_active();
        self.selection = Selection::None;
        was_active
    }
}

fn outcome_of(applied: bool) -> EventOutcome {
    if applied {
        EventOutcome::Recorded
    } else {
        EventOutcome::Ignored
    }
}
