/// Line-level undo history.
///
/// Provides an `UndoStack` of `UndoItem`s, each made of the `UndoAction`s
/// recorded while one user-facing edit ran. Consecutive single-row content
/// edits are coalesced into the item that started the run.
pub mod config;
pub mod operation;
pub mod stack;

pub use config::HistoryConfig;
pub use operation::{ActionKind, UndoAction, UndoItem, UndoRecorder};
pub use stack::UndoStack;
