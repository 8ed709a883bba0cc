//! Pointer and keyboard events delivered to the editor.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in editor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}

/// Keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Key name ("Escape", "z", ...).
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Map the key to an editor command, if it is bound to one.
    pub fn command(&self) -> Option<KeyCommand> {
        let key = self.key.to_ascii_lowercase();
        match (key.as_str(), self.modifiers.command(), self.modifiers.shift) {
            ("escape", _, _) => Some(KeyCommand::CommitWall),
            ("z", true, false) => Some(KeyCommand::Undo),
            ("z", true, true) | ("y", true, _) => Some(KeyCommand::Redo),
            _ => None,
        }
    }
}

/// Commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Close the in-progress wall polyline.
    CommitWall,
    Undo,
    Redo,
}

/// What an event handler did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed; no redraw needed.
    Ignored,
    /// Transient or live geometry changed; redraw, no new history entry.
    Changed,
    /// A discrete action was applied and recorded in history.
    Recorded,
}

impl EventOutcome {
    /// Whether the host should redraw.
    pub fn needs_redraw(self) -> bool {
        !matches!(self, EventOutcome::Ignored)
    }
}
