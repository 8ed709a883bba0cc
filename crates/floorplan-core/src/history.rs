//! Linear undo/redo history of whole-model snapshots.

use crate::canvas::PlanData;
use crate::shapes::Point;

/// A snapshot of the editable model for undo/redo.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// The seven entity collections.
    pub data: PlanData,
    /// The in-progress wall polyline.
    pub scratch_wall: Vec<Point>,
}

/// Snapshot stack with a cursor.
///
/// Entry `index` always mirrors the live model after the last recorded action.
/// Recording truncates everything past the cursor, so acting after an undo
/// discards the redo branch.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    index: usize,
    /// Maximum number of entries kept (0 = unbounded).
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default(), 0)
    }
}

impl History {
    /// Create a history whose base entry is `initial`.
    pub fn new(initial: Snapshot, max_entries: usize) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            max_entries,
        }
    }

    /// Record the state after a completed action.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);

        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.index = self.entries.len() - 1;
        log::debug!("History: recorded entry {} of {}", self.index, self.entries.len());
    }

    /// Replace the entry at `index` with a newer state of the same action.
    ///
    /// Only the current entry may be amended; returns false otherwise.
    pub fn amend(&mut self, index: usize, snapshot: Snapshot) -> bool {
        if index != self.index {
            return false;
        }
        self.entries[index] = snapshot;
        true
    }

    /// Step back one entry and return the state to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        log::debug!("History: undo to entry {}", self.index);
        self.entries.get(self.index)
    }

    /// Step forward one entry and return the state to restore.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        log::debug!("History: redo to entry {}", self.index);
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries, including the base entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the base entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(n: usize) -> Snapshot {
        Snapshot {
            data: PlanData::default(),
            scratch_wall: vec![Point::new(n as f64, 0.0); n],
        }
    }

    #[test]
    fn test_undo_redo() {
        let mut history = History::new(snap(0), 0);
        history.push(snap(1));
        history.push(snap(2));

        assert_eq!(history.undo(), Some(&snap(1)));
        assert_eq!(history.undo(), Some(&snap(0)));
        assert_eq!(history.redo(), Some(&snap(1)));
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = History::new(snap(0), 0);
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
        assert_eq!(history.index(), 0);

        history.push(snap(1));
        assert!(history.redo().is_none());
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_push_truncates_redo_branch() {
        let mut history = History::new(snap(0), 0);
        history.push(snap(1));
        history.push(snap(2));
        history.undo();
        history.undo();
        history.push(snap(3));

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&snap(0)));
    }

    #[test]
    fn test_amend_current_only() {
        let mut history = History::new(snap(0), 0);
        history.push(snap(1));
        assert!(!history.amend(0, snap(5)));
        assert!(history.amend(1, snap(4)));
        assert_eq!(history.undo(), Some(&snap(0)));
        assert_eq!(history.redo(), Some(&snap(4)));
    }

    #[test]
    fn test_max_entries_drops_oldest() {
        let mut history = History::new(snap(0), 3);
        for n in 1..=5 {
            history.push(snap(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.undo(), Some(&snap(4)));
        assert_eq!(history.undo(), Some(&snap(3)));
        assert!(history.undo().is_none());
    }
}
