//! Undo/redo history.
//!
//! The history stores [`Snapshot`]s of the editable parts of a project. A
//! snapshot is taken before each mutation and pushed; undo and redo swap the
//! stored snapshot with the live state, so undo followed by redo returns
//! exactly to the state after the mutation.
//!
//! Snapshots hold the project's `Arc`s, so taking one copies no unit data.

use std::sync::Arc;

use kitchenkit_core::data::{Appliance, Footprint, Group, Project, Unit};

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// The undoable part of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub units: Arc<Vec<Unit>>,
    pub appliances: Arc<Vec<Appliance>>,
    pub footprint: Footprint,
    pub groups: Arc<Vec<Group>>,
}

impl Snapshot {
    pub fn of(project: &Project) -> Self {
        Self {
            units: Arc::clone(&project.units),
            appliances: Arc::clone(&project.appliances),
            footprint: project.footprint.clone(),
            groups: Arc::clone(&project.groups),
        }
    }

    /// `project` with this snapshot's state restored.
    pub fn restore(self, project: &Project) -> Project {
        Project {
            units: self.units,
            appliances: self.appliances,
            footprint: self.footprint,
            groups: self.groups,
            ..project.clone()
        }
    }
}

/// What the history can currently do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Empty,
    HasUndo,
    HasRedo,
    HasBoth,
}

/// Bounded linear undo/redo history.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<Snapshot>,
    /// Number of entries that can be undone; entries past it are redoable.
    cursor: usize,
    capacity: usize,
    pending: Option<Snapshot>,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: capacity.max(1),
            pending: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record the state from before a mutation.
    ///
    /// A pending interaction is committed first, so a discrete edit made
    /// mid-drag lands after the drag in the log. Discards any redo entries
    /// and evicts the oldest entry once the capacity is exceeded.
    pub fn push(&mut self, snapshot: Snapshot) {
        if let Some(before) = self.pending.take() {
            if before != snapshot {
                self.record(before);
            }
        }
        self.record(snapshot);
    }

    fn record(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor);
        self.entries.push(snapshot);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len();
        tracing::debug!(depth = self.cursor, "history push");
    }

    /// Step back. `current` is stored for redo and the previous state is
    /// returned; `None` when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let restored = std::mem::replace(&mut self.entries[self.cursor], current);
        tracing::debug!(undo = self.undo_depth(), redo = self.redo_depth(), "history undo");
        Some(restored)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        let restored = std::mem::replace(&mut self.entries[self.cursor], current);
        self.cursor += 1;
        tracing::debug!(undo = self.undo_depth(), redo = self.redo_depth(), "history redo");
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.cursor
    }

    pub fn state(&self) -> HistoryState {
        match (self.can_undo(), self.can_redo()) {
            (false, false) => HistoryState::Empty,
            (true, false) => HistoryState::HasUndo,
            (false, true) => HistoryState::HasRedo,
            (true, true) => HistoryState::HasBoth,
        }
    }

    /// Remember the state before a continuous interaction such as a drag.
    /// Nested calls keep the first snapshot.
    pub fn begin_interaction(&mut self, snapshot: Snapshot) {
        if self.pending.is_none() {
            self.pending = Some(snapshot);
        }
    }

    /// Finish an interaction, pushing one entry if the state changed.
    /// Returns whether an entry was pushed.
    pub fn commit_interaction(&mut self, current: &Snapshot) -> bool {
        match self.pending.take() {
            Some(before) if before != *current => {
                self.record(before);
                true
            }
            _ => false,
        }
    }

    /// Abandon an interaction. Returns the state from before it began so
    /// the caller can roll back.
    pub fn cancel_interaction(&mut self) -> Option<Snapshot> {
        self.pending.take()
    }

    pub fn in_interaction(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.pending = None;
    }
}
