//! LIFO undo stack with same-row coalescing.
//!
//! A run of single-row content edits collapses into the item that started
//! the run, so one undo reverts the whole run. Structural edits (row
//! insertions and deletions) and multi-action items always start a new
//! entry.

use crate::config::HistoryConfig;
use crate::operation::UndoItem;

/// Undo history for a single document.
pub struct UndoStack {
    /// Items ordered oldest first; the last element is the top.
    items: Vec<UndoItem>,
    /// Configuration parameters.
    config: HistoryConfig,
    /// Items evicted because of the depth limit.
    evicted: usize,
}

impl std::fmt::Debug for UndoStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoStack")
            .field("len", &self.items.len())
            .field("max_depth", &self.config.max_depth)
            .field("evicted", &self.evicted)
            .finish()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl UndoStack {
    /// Creates an empty stack.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
            evicted: 0,
        }
    }

    /// Pushes an item, unless it merges into the current top.
    ///
    /// Empty items are dropped. When the item merges, the top keeps the
    /// prior content and cursor column captured at the start of the run.
    pub fn push(&mut self, item: UndoItem) {
        if item.is_empty() {
            return;
        }
        if self.merge(&item) {
            tracing::trace!(row = item.actions[0].row, "coalesced undo item");
            return;
        }

        self.items.push(item);
        if self.items.len() > self.config.max_depth {
            let excess = self.items.len() - self.config.max_depth;
            self.items.drain(..excess);
            self.evicted += excess;
            tracing::debug!(excess, "evicted oldest undo items");
        }
    }

    /// Returns true if `item` can be absorbed by the top of the stack.
    ///
    /// Both `item` and the top must be a single content update of the same
    /// row. The stack itself is not modified.
    pub fn merge(&self, item: &UndoItem) -> bool {
        let Some(action) = item.single_action() else {
            return false;
        };
        if !action.is_update() {
            return false;
        }
        let Some(top) = self.items.last() else {
            return false;
        };
        match top.single_action() {
            Some(prev) => prev.is_update() && prev.row == action.row,
            None => false,
        }
    }

    /// Removes and returns the top item, or `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<UndoItem> {
        let item = self.items.pop();
        if item.is_none() {
            tracing::debug!("undo stack empty");
        }
        item
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<&UndoItem> {
        self.items.last()
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items dropped by the depth limit so far.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Drops all history.
    pub fn clear(&mut self) {
        self.items.clear();
        self.evicted = 0;
    }
}
