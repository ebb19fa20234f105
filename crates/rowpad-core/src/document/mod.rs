//! Document model combining text buffer, cursor, viewport, selection and
//! undo history.
//!
//! A `Document` owns all editing state for one file and an injected
//! [`Renderer`]. Cursor motions and undo live here; composite edits are in
//! the `edit` submodule, and file I/O is in the `io` submodule.

mod edit;
mod io;

use std::path::PathBuf;

use crate::buffer::TextBuffer;
use crate::command::{Command, Motion};
use crate::cursor::Cursor;
use crate::encoding::{LineEnding, TextEncoding};
use crate::history::{ActionKind, HistoryConfig, UndoStack};
use crate::position::{Position, Selection};
use crate::render::{Frame, Redraw, Renderer};
use crate::viewport::{ScreenSize, Viewport};

pub use io::{FileStore, LoadedText, Loader, Saver, TextFormat};

/// Editing options applied when a document is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Number of spaces inserted by `Tab`.
    pub tab_width: usize,
    /// Undo history limits.
    pub history: HistoryConfig,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            history: HistoryConfig::default(),
        }
    }
}

/// A single document with its buffer, cursor, history, and metadata.
pub struct Document {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    selection: Selection,
    history: UndoStack,
    tab_width: usize,
    renderer: Box<dyn Renderer>,
    /// File path on disk, if any.
    pub file_path: Option<PathBuf>,
    /// The encoding used when saving.
    pub encoding: TextEncoding,
    /// The line ending style used when saving.
    pub line_ending: LineEnding,
    /// Whether the document has been modified since last save.
    pub modified: bool,
    /// Timestamp of the last successful save.
    pub last_saved_at: Option<chrono::DateTime<chrono::Local>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("viewport", &self.viewport)
            .field("selection", &self.selection)
            .field("history", &self.history)
            .field("file_path", &self.file_path)
            .field("encoding", &self.encoding)
            .field("line_ending", &self.line_ending)
            .field("modified", &self.modified)
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Creates an empty document (one empty line) drawing to `renderer`.
    pub fn new(renderer: Box<dyn Renderer>, options: EditorOptions) -> Self {
        Self::from_buffer(TextBuffer::new(), renderer, options)
    }

    /// Creates a document holding `lines`. An empty iterator yields a
    /// single empty line.
    ///
    /// # Panics
    ///
    /// Panics if a line contains `\n`.
    pub fn from_lines<I, S>(lines: I, renderer: Box<dyn Renderer>, options: EditorOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_buffer(TextBuffer::from_lines(lines), renderer, options)
    }

    fn from_buffer(buffer: TextBuffer, renderer: Box<dyn Renderer>, options: EditorOptions) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            viewport: Viewport::default(),
            selection: Selection::Empty,
            history: UndoStack::new(options.history),
            tab_width: options.tab_width.max(1),
            renderer,
            file_path: None,
            encoding: TextEncoding::default(),
            line_ending: LineEnding::default(),
            modified: false,
            last_saved_at: None,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Returns the current content as owned lines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.to_lines()
    }

    /// Size of the text area as reported by the renderer.
    pub fn screen_size(&self) -> ScreenSize {
        self.renderer.size()
    }

    /// Places the cursor at `pos`, clamped to the buffer, and scrolls it
    /// into view. Drops any selection.
    pub fn set_cursor(&mut self, pos: Position) -> Redraw {
        let line = pos.line.min(self.buffer.last_line());
        let col = pos.col.min(self.buffer.line_len(line));
        self.cursor.set(Position::new(line, col));
        let redraw = self.selection.clear();
        redraw.merge(self.scroll_to_cursor())
    }

    /// Applies one logical command and returns what must be repainted.
    pub fn execute(&mut self, command: Command) -> Redraw {
        tracing::trace!(?command, "execute");
        match command {
            Command::Move { motion, extend } => self.move_cursor(motion, extend),
            Command::InsertChar(ch) => self.insert_char(ch),
            Command::Backspace => self.backspace(),
            Command::Delete => self.delete(),
            Command::Enter => self.enter(),
            Command::Tab => self.tab(),
            Command::Undo => self.undo(),
        }
    }

    /// Moves the cursor and updates the selection. `extend` is the state of
    /// the selection modifier.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) -> Redraw {
        let prev = self.cursor.position;
        let page = self.screen_size().page_lines();
        let buffer = &self.buffer;
        match motion {
            Motion::Up => self.cursor.move_up(buffer),
            Motion::Down => self.cursor.move_down(buffer),
            Motion::Left => self.cursor.move_left(buffer),
            Motion::Right => self.cursor.move_right(buffer),
            Motion::WordLeft => self.cursor.move_word_left(buffer),
            Motion::WordRight => self.cursor.move_word_right(buffer),
            Motion::Home => self.cursor.move_to_line_start(),
            Motion::End => self.cursor.move_to_line_end(buffer),
            Motion::PageUp => self.cursor.move_page_up(page, buffer),
            Motion::PageDown => self.cursor.move_page_down(page, buffer),
        }

        let scrolled = self.scroll_to_cursor();
        let cur = self.cursor.position;
        scrolled.merge(self.selection.update(extend, prev, cur, &self.buffer))
    }

    /// Reverts the most recent undo item. An empty history is a no-op.
    pub fn undo(&mut self) -> Redraw {
        let Some(item) = self.history.pop() else {
            tracing::debug!("undo: history is empty");
            return Redraw::None;
        };
        tracing::debug!(actions = item.actions.len(), remaining = self.history.len(), "undo");

        let mut redraw = self.selection.clear();
        for action in item.actions.iter().rev() {
            match action.kind {
                ActionKind::Insert => self.buffer.delete_line(action.row, None),
                ActionKind::Delete => self.buffer.insert_line(action.row, &action.prior, None),
                ActionKind::Update => self.buffer.update_line(action.row, &action.prior, None),
            }

            let line = action.row.min(self.buffer.last_line());
            self.cursor.position.line = line;
            self.cursor.desired_col = action.cursor_col;
            self.cursor.align_col(&self.buffer);

            let step = match action.kind {
                ActionKind::Update => self.line_or_full(line),
                ActionKind::Insert | ActionKind::Delete => {
                    self.scroll_to_cursor();
                    Redraw::Full
                }
            };
            redraw = redraw.merge(step);
        }

        self.modified = true;
        redraw
    }

    /// Hands the current state to the renderer with `redraw` as the hint.
    pub fn present(&mut self, redraw: Redraw) {
        let frame = Frame {
            buffer: &self.buffer,
            cursor: self.cursor.position,
            viewport: self.viewport,
            selection: self.selection,
            redraw,
        };
        self.renderer.draw(&frame);
    }

    /// Scrolls the cursor into view; any shift needs a full redraw.
    fn scroll_to_cursor(&mut self) -> Redraw {
        let size = self.screen_size();
        if self.viewport.adjust(self.cursor.position, size) {
            Redraw::Full
        } else {
            Redraw::None
        }
    }

    /// Hint after `row` changed in place: only that line, unless the
    /// cursor left the window.
    fn line_or_full(&mut self, row: usize) -> Redraw {
        let size = self.screen_size();
        if self.viewport.must_adjust(self.cursor.position, size) {
            self.viewport.adjust(self.cursor.position, size);
            Redraw::Full
        } else {
            Redraw::Line(row)
        }
    }
}
