//! Line-oriented text buffer wrapping `ropey::Rope`.
use std::fmt;

use ropey::Rope;

use crate::history::{ActionKind, UndoRecorder};

/// An ordered collection of lines backed by a rope.
///
/// Lines are separated by `\n` inside the rope and never contain a line
/// terminator themselves. The buffer always holds at least one line: an
/// empty rope is a single empty line.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    /// Builds a buffer from `\n`-separated text. A trailing `\n` yields a
    /// trailing empty line.
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Creates a buffer from already split lines. No lines at all yields a
    /// single empty line.
    ///
    /// # Panics
    ///
    /// Panics if a line contains `\n`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            assert!(!line.contains('\n'), "line {i} contains a line break");
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line);
        }
        Self::from(text.as_str())
    }

    /// Returns the number of lines. Never zero.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Returns the index of the last line.
    pub fn last_line(&self) -> usize {
        self.len_lines() - 1
    }

    /// Returns the length of a line in chars, excluding the terminator.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn line_len(&self, row: usize) -> usize {
        self.check_row(row);
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Returns the content of a line without its terminator.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn line(&self, row: usize) -> String {
        let len = self.line_len(row);
        self.rope.line(row).slice(..len).to_string()
    }

    /// Returns the char at `(row, col)`, or `None` past the end of the line
    /// or the buffer.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.len_lines() || col >= self.line_len(row) {
            return None;
        }
        Some(self.rope.line(row).char(col))
    }

    /// Returns all lines in order.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.len_lines()).map(|row| self.line(row)).collect()
    }

    /// Replaces the content of `row`.
    ///
    /// Records an update action carrying the previous content when a
    /// recorder is given.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range or `content` contains `\n`.
    pub fn update_line(
        &mut self,
        row: usize,
        content: &str,
        recorder: Option<&mut UndoRecorder>,
    ) {
        assert!(!content.contains('\n'), "line content contains a line break");
        let len = self.line_len(row);
        if let Some(rec) = recorder {
            rec.record(row, ActionKind::Update, self.line(row));
        }
        let start = self.rope.line_to_char(row);
        self.rope.remove(start..start + len);
        self.rope.insert(start, content);
    }

    /// Inserts a line before `row`, or appends when `row` is at or past the
    /// end.
    ///
    /// With a recorder this yields two actions: an insert marker for the new
    /// slot followed by the update that fills it with `content`.
    ///
    /// # Panics
    ///
    /// Panics if `content` contains `\n`.
    pub fn insert_line(
        &mut self,
        row: usize,
        content: &str,
        mut recorder: Option<&mut UndoRecorder>,
    ) {
        let row = row.min(self.len_lines());
        if row == self.len_lines() {
            let end = self.rope.len_chars();
            self.rope.insert_char(end, '\n');
        } else {
            let start = self.rope.line_to_char(row);
            self.rope.insert_char(start, '\n');
        }
        if let Some(rec) = recorder.as_deref_mut() {
            rec.record(row, ActionKind::Insert, String::new());
        }
        self.update_line(row, content, recorder);
    }

    /// Removes `row`. No-op if `row` is past the end.
    ///
    /// # Panics
    ///
    /// Panics if `row` is the only remaining line.
    pub fn delete_line(&mut self, row: usize, recorder: Option<&mut UndoRecorder>) {
        let len = self.len_lines();
        if row >= len {
            return;
        }
        assert!(len > 1, "cannot delete the only line of a buffer");
        if let Some(rec) = recorder {
            rec.record(row, ActionKind::Delete, self.line(row));
        }
        if row + 1 < len {
            let start = self.rope.line_to_char(row);
            let end = self.rope.line_to_char(row + 1);
            self.rope.remove(start..end);
        } else {
            // Last line: eat the terminator of the previous one.
            let start = self.rope.line_to_char(row) - 1;
            let end = self.rope.len_chars();
            self.rope.remove(start..end);
        }
    }

    fn check_row(&self, row: usize) {
        assert!(
            row < self.len_lines(),
            "line index {} out of bounds (buffer has {} lines)",
            row,
            self.len_lines()
        );
    }
}

/// Returns the first `col` chars of `line`.
pub fn head(line: &str, col: usize) -> &str {
    match line.char_indices().nth(col) {
        Some((byte, _)) => &line[..byte],
        None => line,
    }
}

/// Returns `line` from char `col` on.
pub fn tail(line: &str, col: usize) -> &str {
    match line.char_indices().nth(col) {
        Some((byte, _)) => &line[byte..],
        None => "",
    }
}
