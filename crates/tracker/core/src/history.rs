//! Linear undo/redo history of item transitions.
//!
//! Only the item index and direction are recorded. Counters only ever sit
//! on multiples of `count_step` or on `count_max`, and a downgrade from
//! `count_max` lands back on the multiple it was clamped from, so the
//! inverse direction restores the previous state.
use crate::catalog::ItemCatalog;

/// One recorded transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub item_index: usize,
    pub was_upgrade: bool,
}

impl HistoryEntry {
    pub const fn new(item_index: usize, was_upgrade: bool) -> Self {
        Self {
            item_index,
            was_upgrade,
        }
    }

    fn apply(&self, catalog: &mut ItemCatalog, forward: bool) -> bool {
        let Some(item) = catalog.get_mut(self.item_index) else {
            return false;
        };

        if self.was_upgrade == forward {
            item.upgrade()
        } else {
            item.downgrade()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new transition. Starting a new branch discards the redo stack.
    pub fn push(&mut self, item_index: usize, was_upgrade: bool) {
        self.undo_stack
            .push(HistoryEntry::new(item_index, was_upgrade));
        self.redo_stack.clear();
    }

    /// Reverts the most recent transition. Returns the reverted entry.
    pub fn undo(&mut self, catalog: &mut ItemCatalog) -> Option<HistoryEntry> {
        let entry = self.undo_stack.pop()?;
        entry.apply(catalog, false);
        self.redo_stack.push(entry);
        Some(entry)
    }

    /// Re-applies the most recently undone transition. Returns the entry.
    pub fn redo(&mut self, catalog: &mut ItemCatalog) -> Option<HistoryEntry> {
        let entry = self.redo_stack.pop()?;
        entry.apply(catalog, true);
        self.undo_stack.push(entry);
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
