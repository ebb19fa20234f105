// Re-exports from rowpad-mod-history.
pub use rowpad_mod_history::{
    ActionKind, HistoryConfig, UndoAction, UndoItem, UndoRecorder, UndoStack,
};
