//! Cursor model: absolute position plus sticky column, and the motions
//! that move it.
use crate::buffer::TextBuffer;
use crate::position::Position;

/// Returns true for chars that belong to a word (letters and digits).
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// The cursor state for a document.
///
/// `position.line` is always a valid row and `position.col` lies within
/// `0..=line_len`. `desired_col` is the column vertical moves try to return
/// to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Current cursor position.
    pub position: Position,
    /// Sticky column kept across vertical and page moves.
    pub desired_col: usize,
}

impl Cursor {
    /// Creates a new cursor at position (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the cursor at `pos` and makes its column the sticky target.
    pub fn set(&mut self, pos: Position) {
        self.position = pos;
        self.desired_col = pos.col;
    }

    /// Sets the column to the sticky target clamped to the current line.
    pub fn align_col(&mut self, buffer: &TextBuffer) {
        let line_len = buffer.line_len(self.position.line);
        self.position.col = self.desired_col.min(line_len);
    }

    /// Moves the cursor up by one line, preserving the desired column.
    pub fn move_up(&mut self, buffer: &TextBuffer) {
        self.position.line = self.position.line.saturating_sub(1);
        self.align_col(buffer);
    }

    /// Moves the cursor down by one line, preserving the desired column.
    pub fn move_down(&mut self, buffer: &TextBuffer) {
        self.position.line = (self.position.line + 1).min(buffer.last_line());
        self.align_col(buffer);
    }

    /// Moves the cursor up by `page_lines`, preserving the desired column.
    pub fn move_page_up(&mut self, page_lines: usize, buffer: &TextBuffer) {
        self.position.line = self.position.line.saturating_sub(page_lines);
        self.align_col(buffer);
    }

    /// Moves the cursor down by `page_lines`, preserving the desired column.
    pub fn move_page_down(&mut self, page_lines: usize, buffer: &TextBuffer) {
        self.position.line = self
            .position
            .line
            .saturating_add(page_lines)
            .min(buffer.last_line());
        self.align_col(buffer);
    }

    /// Moves the cursor right by one character, wrapping to the start of
    /// the next line.
    pub fn move_right(&mut self, buffer: &TextBuffer) {
        let line_len = buffer.line_len(self.position.line);
        if self.position.col < line_len {
            self.position.col += 1;
        } else if self.position.line < buffer.last_line() {
            self.position.line += 1;
            self.position.col = 0;
        }
        self.desired_col = self.position.col;
    }

    /// Moves the cursor left by one character, wrapping to the end of the
    /// previous line.
    pub fn move_left(&mut self, buffer: &TextBuffer) {
        if self.position.col > 0 {
            self.position.col -= 1;
        } else if self.position.line > 0 {
            self.position.line -= 1;
            self.position.col = buffer.line_len(self.position.line);
        }
        self.desired_col = self.position.col;
    }

    /// Moves the cursor to the end of the next word on the current line.
    ///
    /// At the end of a line this behaves like [`move_right`](Self::move_right).
    pub fn move_word_right(&mut self, buffer: &TextBuffer) {
        let line = self.position.line;
        let line_len = buffer.line_len(line);
        if self.position.col >= line_len {
            self.move_right(buffer);
            return;
        }

        let mut col = self.position.col;
        // Skip separators up to the next word
        while col < line_len && !buffer.char_at(line, col).is_some_and(is_word_char) {
            col += 1;
        }
        // Skip the word itself
        while col < line_len && buffer.char_at(line, col).is_some_and(is_word_char) {
            col += 1;
        }

        self.position.col = col;
        self.desired_col = col;
    }

    /// Moves the cursor to the start of the previous word on the current
    /// line.
    ///
    /// At the start of a line this behaves like [`move_left`](Self::move_left).
    pub fn move_word_left(&mut self, buffer: &TextBuffer) {
        let line = self.position.line;
        if self.position.col == 0 {
            self.move_left(buffer);
            return;
        }

        let mut col = self.position.col;
        while col > 0 && !buffer.char_at(line, col - 1).is_some_and(is_word_char) {
            col -= 1;
        }
        while col > 0 && buffer.char_at(line, col - 1).is_some_and(is_word_char) {
            col -= 1;
        }

        self.position.col = col;
        self.desired_col = col;
    }

    /// Moves the cursor to the beginning of the current line.
    pub fn move_to_line_start(&mut self) {
        self.position.col = 0;
        self.desired_col = 0;
    }

    /// Moves the cursor to the end of the current line.
    pub fn move_to_line_end(&mut self, buffer: &TextBuffer) {
        self.position.col = buffer.line_len(self.position.line);
        self.desired_col = self.position.col;
    }
}
