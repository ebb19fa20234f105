//! Core types for undo actions and items.

/// What a recorded action did to its row.
///
/// Exactly one kind is active per action; undo replays the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The row's content was replaced. Undo restores the prior content.
    Update,
    /// A new row was created at this index. Undo removes it.
    Insert,
    /// The row was removed. Undo reinserts the prior content.
    Delete,
}

/// A single line-level mutation that can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoAction {
    /// 0-indexed row the mutation targeted.
    pub row: usize,
    /// Kind of mutation.
    pub kind: ActionKind,
    /// Content of `row` immediately before the mutation.
    pub prior: String,
    /// Cursor column when the action was recorded.
    pub cursor_col: usize,
}

impl UndoAction {
    /// Returns true if this action only replaced a row's content.
    pub fn is_update(&self) -> bool {
        self.kind == ActionKind::Update
    }
}

/// One atomic user-visible edit, made of one or more actions in
/// chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoItem {
    pub actions: Vec<UndoAction>,
}

impl UndoItem {
    /// Creates an empty item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no action was recorded.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the single action of this item, or `None` if it holds zero
    /// or several actions.
    pub fn single_action(&self) -> Option<&UndoAction> {
        match self.actions.as_slice() {
            [action] => Some(action),
            _ => None,
        }
    }

    /// Returns true if this item is exactly one content update.
    ///
    /// Only such items take part in coalescing.
    pub fn is_single_update(&self) -> bool {
        self.single_action().is_some_and(UndoAction::is_update)
    }
}

/// Collects actions for one edit while it runs.
///
/// Buffer primitives receive an optional `&mut UndoRecorder`; when present
/// they append the inverse information before mutating. The cursor column
/// stamped on each action is the column the recorder was opened with,
/// unless the edit moves it explicitly with [`set_cursor_col`](Self::set_cursor_col).
#[derive(Debug, Clone)]
pub struct UndoRecorder {
    item: UndoItem,
    cursor_col: usize,
}

impl UndoRecorder {
    /// Opens a recorder stamping actions with `cursor_col`.
    pub fn new(cursor_col: usize) -> Self {
        Self {
            item: UndoItem::new(),
            cursor_col,
        }
    }

    /// Changes the column stamped on subsequently recorded actions.
    pub fn set_cursor_col(&mut self, cursor_col: usize) {
        self.cursor_col = cursor_col;
    }

    /// Appends an action.
    pub fn record(&mut self, row: usize, kind: ActionKind, prior: String) {
        self.item.actions.push(UndoAction {
            row,
            kind,
            prior,
            cursor_col: self.cursor_col,
        });
    }

    /// Number of actions recorded so far.
    pub fn len(&self) -> usize {
        self.item.actions.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    /// Closes the recorder and returns the collected item.
    pub fn finish(self) -> UndoItem {
        self.item
    }
}
