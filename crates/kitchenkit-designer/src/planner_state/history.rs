//! Undo/redo for planner state.

use super::PlannerState;
use crate::history::{HistoryState, Snapshot};

impl PlannerState {
    /// Undo the last recorded change. Clears the selection.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo(Snapshot::of(&self.project)) else {
            return false;
        };
        self.project = snapshot.restore(&self.project);
        self.selection = None;
        self.is_modified = true;
        true
    }

    /// Redo the last undone change. Clears the selection.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo(Snapshot::of(&self.project)) else {
            return false;
        };
        self.project = snapshot.restore(&self.project);
        self.selection = None;
        self.is_modified = true;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    /// Start a drag or other continuous edit.
    pub fn begin_interaction(&mut self) {
        self.history.begin_interaction(Snapshot::of(&self.project));
    }

    /// Finish a continuous edit, recording it as one undo step.
    pub fn commit_interaction(&mut self) -> bool {
        self.history.commit_interaction(&Snapshot::of(&self.project))
    }

    /// Abandon a continuous edit, rolling the project back to where it
    /// started. Returns whether anything was rolled back.
    pub fn cancel_interaction(&mut self) -> bool {
        match self.history.cancel_interaction() {
            Some(before) if before != Snapshot::of(&self.project) => {
                self.project = before.restore(&self.project);
                true
            }
            _ => false,
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
