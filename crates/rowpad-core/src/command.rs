//! Logical commands produced by an input dispatcher.
//!
//! Decoding raw key events into these commands happens outside the core.

/// A cursor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    WordLeft,
    WordRight,
    Home,
    End,
    PageUp,
    PageDown,
}

/// One user-level command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Moves the cursor; `extend` is set while the selection modifier is
    /// held.
    Move { motion: Motion, extend: bool },
    InsertChar(char),
    Backspace,
    Delete,
    Enter,
    Tab,
    Undo,
}

impl Command {
    /// Plain cursor motion without selection.
    pub fn motion(motion: Motion) -> Self {
        Self::Move {
            motion,
            extend: false,
        }
    }

    /// Cursor motion extending the selection.
    pub fn select(motion: Motion) -> Self {
        Self::Move {
            motion,
            extend: true,
        }
    }
}
