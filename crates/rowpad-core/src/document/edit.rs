//! Composite edit operations.
//!
//! Each public operation is one undoable edit: it opens an
//! [`UndoRecorder`] stamped with the pre-edit cursor column, drives the
//! buffer primitives through it and pushes the result onto the history.
//! The first action recorded is always on the cursor row, so undo puts the
//! cursor back where the edit started.

use crate::buffer::{head, tail};
use crate::history::UndoRecorder;
use crate::position::{Position, Selection};
use crate::render::Redraw;

use super::Document;

impl Document {
    /// Inserts `ch` at the cursor. A `'\n'` or `'\r'` behaves like
    /// [`enter`](Self::enter), so no line ever holds a typed terminator.
    pub fn insert_char(&mut self, ch: char) -> Redraw {
        if ch == '\n' || ch == '\r' {
            return self.enter();
        }
        let mut utf8 = [0u8; 4];
        self.splice_at_cursor(ch.encode_utf8(&mut utf8))
    }

    /// Inserts `tab_width` spaces at the cursor.
    pub fn tab(&mut self) -> Redraw {
        let spaces = " ".repeat(self.tab_width);
        self.splice_at_cursor(&spaces)
    }

    /// Removes the char before the cursor, or joins the current line onto
    /// the previous one at column 0.
    pub fn backspace(&mut self) -> Redraw {
        let mut redraw = self.drop_selection();
        let Position { line, col } = self.cursor.position;
        let mut rec = UndoRecorder::new(col);

        if col > 0 {
            let current = self.buffer.line(line);
            let updated = format!("{}{}", head(&current, col - 1), tail(&current, col));
            self.buffer.update_line(line, &updated, Some(&mut rec));
            self.cursor.set(Position::new(line, col - 1));
            redraw = redraw.merge(self.line_or_full(line));
        } else if line > 0 {
            let current = self.buffer.line(line);
            let above = self.buffer.line(line - 1);
            let join_col = above.chars().count();
            // Delete first so the run starts on the cursor row.
            self.buffer.delete_line(line, Some(&mut rec));
            self.buffer
                .update_line(line - 1, &format!("{above}{current}"), Some(&mut rec));
            self.cursor.set(Position::new(line - 1, join_col));
            self.scroll_to_cursor();
            redraw = Redraw::Full;
        }

        self.commit(rec);
        redraw
    }

    /// Removes the char under the cursor, or joins the next line onto the
    /// current one at end of line.
    ///
    /// An active selection is removed first, then the point delete runs at
    /// its begin, so the selection's inclusive end cell goes too. Both steps
    /// form a single undo item.
    pub fn delete(&mut self) -> Redraw {
        let mut rec = UndoRecorder::new(self.cursor.position.col);
        let mut redraw = Redraw::None;

        if let Some(range) = self.selection.range() {
            self.selection = Selection::Empty;
            self.remove_range(range.begin(), range.end(), &mut rec);
            redraw = Redraw::Full;
        }
        redraw = redraw.merge(self.delete_forward(&mut rec));

        self.commit(rec);
        redraw
    }

    /// Splits the current line at the cursor; the tail moves to a new line
    /// below and the cursor to its start.
    pub fn enter(&mut self) -> Redraw {
        let redraw = self.drop_selection();
        let Position { line, col } = self.cursor.position;
        let current = self.buffer.line(line);
        let mut rec = UndoRecorder::new(col);

        self.buffer
            .update_line(line, head(&current, col), Some(&mut rec));
        self.buffer
            .insert_line(line + 1, tail(&current, col), Some(&mut rec));
        self.commit(rec);

        self.cursor.set(Position::new(line + 1, 0));
        self.scroll_to_cursor();
        redraw.merge(Redraw::Full)
    }

    fn splice_at_cursor(&mut self, text: &str) -> Redraw {
        let redraw = self.drop_selection();
        let Position { line, col } = self.cursor.position;
        let current = self.buffer.line(line);
        let updated = format!("{}{text}{}", head(&current, col), tail(&current, col));

        let mut rec = UndoRecorder::new(col);
        self.buffer.update_line(line, &updated, Some(&mut rec));
        self.commit(rec);

        self.cursor
            .set(Position::new(line, col + text.chars().count()));
        redraw.merge(self.line_or_full(line))
    }

    /// Removes the caret span `[begin, end)` and leaves the cursor on
    /// `begin`, so the cell at `end` is what sits under the cursor after.
    fn remove_range(&mut self, begin: Position, end: Position, rec: &mut UndoRecorder) {
        rec.set_cursor_col(begin.col);
        let first = self.buffer.line(begin.line);
        let last = self.buffer.line(end.line);
        let joined = format!("{}{}", head(&first, begin.col), tail(&last, end.col));

        self.buffer
            .update_line(begin.line, &joined, Some(&mut *rec));
        for _ in begin.line..end.line {
            self.buffer.delete_line(begin.line + 1, Some(&mut *rec));
        }
        tracing::debug!(?begin, ?end, "removed selection");

        self.cursor.set(begin);
        self.scroll_to_cursor();
    }

    fn delete_forward(&mut self, rec: &mut UndoRecorder) -> Redraw {
        let Position { line, col } = self.cursor.position;
        let current = self.buffer.line(line);

        if col < current.chars().count() {
            let updated = format!("{}{}", head(&current, col), tail(&current, col + 1));
            self.buffer.update_line(line, &updated, Some(rec));
            self.cursor.desired_col = col;
            self.line_or_full(line)
        } else if line < self.buffer.last_line() {
            let below = self.buffer.line(line + 1);
            self.buffer
                .update_line(line, &format!("{current}{below}"), Some(&mut *rec));
            self.buffer.delete_line(line + 1, Some(rec));
            self.cursor.desired_col = col;
            Redraw::Full
        } else {
            Redraw::None
        }
    }

    /// Clears an active selection before an edit that does not consume it.
    fn drop_selection(&mut self) -> Redraw {
        if self.selection.is_empty() {
            Redraw::None
        } else {
            self.selection = Selection::Empty;
            Redraw::Full
        }
    }

    fn commit(&mut self, rec: UndoRecorder) {
        let item = rec.finish();
        if !item.is_empty() {
            self.modified = true;
            self.history.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, Motion};
    use crate::document::{Document, EditorOptions};
    use crate::position::Position;
    use crate::render::{HeadlessRenderer, Redraw};
    use crate::viewport::ScreenSize;

    fn doc(lines: &[&str]) -> Document {
        let renderer = HeadlessRenderer::new(ScreenSize::default());
        Document::from_lines(lines, Box::new(renderer), EditorOptions::default())
    }

    fn pos(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    fn type_str(doc: &mut Document, text: &str) {
        for ch in text.chars() {
            doc.execute(Command::InsertChar(ch));
        }
    }

    // ── InsertChar / Tab ────────────────────────────────────────────

    #[test]
    fn test_insert_char() {
        let mut doc = doc(&["ac"]);
        doc.set_cursor(pos(0, 1));
        let redraw = doc.execute(Command::InsertChar('b'));
        assert_eq!(doc.lines(), vec!["abc"]);
        assert_eq!(doc.cursor().position, pos(0, 2));
        assert_eq!(doc.cursor().desired_col, 2);
        assert_eq!(redraw, Redraw::Line(0));
        assert!(doc.modified);
    }

    #[test]
    fn test_insert_multibyte_char() {
        let mut doc = doc(&["ab"]);
        doc.set_cursor(pos(0, 1));
        doc.execute(Command::InsertChar('é'));
        doc.execute(Command::InsertChar('日'));
        assert_eq!(doc.lines(), vec!["aé日b"]);
        assert_eq!(doc.cursor().position, pos(0, 3));
    }

    #[test]
    fn test_insert_newline_char_splits_line() {
        let mut doc = doc(&["ab"]);
        doc.set_cursor(pos(0, 1));
        doc.execute(Command::InsertChar('\n'));
        assert_eq!(doc.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_carriage_return_splits_line() {
        let mut doc = doc(&["ab"]);
        doc.set_cursor(pos(0, 1));
        assert_eq!(doc.execute(Command::InsertChar('\r')), Redraw::Full);
        assert_eq!(doc.lines(), vec!["a", "b"]);
        assert_eq!(doc.cursor().position, pos(1, 0));
        assert!(doc.lines().iter().all(|line| !line.contains('\r')));

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["ab"]);
    }

    #[test]
    fn test_tab_inserts_spaces() {
        let mut doc = doc(&["x"]);
        let redraw = doc.execute(Command::Tab);
        assert_eq!(doc.lines(), vec!["    x"]);
        assert_eq!(doc.cursor().position, pos(0, 4));
        assert_eq!(redraw, Redraw::Line(0));
    }

    #[test]
    fn test_tab_width_option() {
        let renderer = HeadlessRenderer::new(ScreenSize::default());
        let options = EditorOptions {
            tab_width: 2,
            ..EditorOptions::default()
        };
        let mut doc = Document::from_lines(["x"], Box::new(renderer), options);
        doc.execute(Command::Tab);
        assert_eq!(doc.lines(), vec!["  x"]);
    }

    // ── Backspace ───────────────────────────────────────────────────

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut doc = doc(&["abc"]);
        doc.set_cursor(pos(0, 2));
        assert_eq!(doc.execute(Command::Backspace), Redraw::Line(0));
        assert_eq!(doc.lines(), vec!["ac"]);
        assert_eq!(doc.cursor().position, pos(0, 1));
    }

    #[test]
    fn test_backspace_at_buffer_start_is_noop() {
        let mut doc = doc(&["abc"]);
        assert_eq!(doc.execute(Command::Backspace), Redraw::None);
        assert_eq!(doc.lines(), vec!["abc"]);
        assert!(doc.history().is_empty());
        assert!(!doc.modified);
    }

    #[test]
    fn test_backspace_merge_scenario() {
        let mut doc = doc(&["ab", "cd"]);
        doc.set_cursor(pos(1, 0));

        assert_eq!(doc.execute(Command::Backspace), Redraw::Full);
        assert_eq!(doc.lines(), vec!["abcd"]);
        assert_eq!(doc.cursor().position, pos(0, 2));

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["ab", "cd"]);
        assert_eq!(doc.cursor().position, pos(1, 0));
    }

    // ── Delete ──────────────────────────────────────────────────────

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut doc = doc(&["abc"]);
        doc.set_cursor(pos(0, 1));
        assert_eq!(doc.execute(Command::Delete), Redraw::Line(0));
        assert_eq!(doc.lines(), vec!["ac"]);
        assert_eq!(doc.cursor().position, pos(0, 1));
    }

    #[test]
    fn test_delete_at_line_end_joins_next() {
        let mut doc = doc(&["ab", "cd"]);
        doc.set_cursor(pos(0, 2));
        assert_eq!(doc.execute(Command::Delete), Redraw::Full);
        assert_eq!(doc.lines(), vec!["abcd"]);
        assert_eq!(doc.cursor().position, pos(0, 2));

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["ab", "cd"]);
        assert_eq!(doc.cursor().position, pos(0, 2));
    }

    #[test]
    fn test_delete_at_buffer_end_is_noop() {
        let mut doc = doc(&["ab"]);
        doc.set_cursor(pos(0, 2));
        assert_eq!(doc.execute(Command::Delete), Redraw::None);
        assert!(doc.history().is_empty());
    }

    #[test]
    fn test_delete_single_line_selection() {
        let mut doc = doc(&["abcdef"]);
        doc.set_cursor(pos(0, 1));
        for _ in 0..3 {
            doc.execute(Command::select(Motion::Right));
        }
        // Selected cells: b, c, d.
        assert_eq!(doc.execute(Command::Delete), Redraw::Full);
        assert_eq!(doc.lines(), vec!["aef"]);
        assert_eq!(doc.cursor().position, pos(0, 1));
        assert!(doc.selection().is_empty());
        assert_eq!(doc.history().len(), 1);

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["abcdef"]);
        assert_eq!(doc.cursor().position, pos(0, 1));
    }

    #[test]
    fn test_delete_multi_line_selection() {
        let mut doc = doc(&["abc", "def", "ghi"]);
        doc.set_cursor(pos(0, 1));
        doc.execute(Command::select(Motion::Down));
        // Selected cells: b, c, line break, d.
        doc.execute(Command::Delete);
        assert_eq!(doc.lines(), vec!["aef", "ghi"]);
        assert_eq!(doc.cursor().position, pos(0, 1));

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["abc", "def", "ghi"]);
    }

    #[test]
    fn test_delete_selected_line_break() {
        let mut doc = doc(&["ab", "cd"]);
        doc.set_cursor(pos(0, 2));
        doc.execute(Command::select(Motion::Right));
        doc.execute(Command::Delete);
        assert_eq!(doc.lines(), vec!["abcd"]);
    }

    // ── Enter ───────────────────────────────────────────────────────

    #[test]
    fn test_enter_undo_scenario() {
        let mut doc = doc(&["hello"]);
        doc.set_cursor(pos(0, 5));

        assert_eq!(doc.execute(Command::Enter), Redraw::Full);
        assert_eq!(doc.lines(), vec!["hello", ""]);
        assert_eq!(doc.cursor().position, pos(1, 0));

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["hello"]);
        assert_eq!(doc.cursor().position, pos(0, 5));
    }

    #[test]
    fn test_enter_splits_line() {
        let mut doc = doc(&["hello world", "next"]);
        doc.set_cursor(pos(0, 5));
        doc.execute(Command::Enter);
        assert_eq!(doc.lines(), vec!["hello", " world", "next"]);
        assert_eq!(doc.cursor().position, pos(1, 0));
    }

    #[test]
    fn test_enter_clears_selection() {
        let mut doc = doc(&["abc"]);
        doc.execute(Command::select(Motion::Right));
        assert!(!doc.selection().is_empty());

        assert_eq!(doc.execute(Command::Enter), Redraw::Full);
        assert!(doc.selection().is_empty());
        assert_eq!(doc.lines(), vec!["a", "bc"]);
        assert_eq!(doc.cursor().position, pos(1, 0));
    }

    #[test]
    fn test_edit_clears_selection() {
        let mut doc = doc(&["abc"]);
        doc.execute(Command::select(Motion::Right));
        assert_eq!(doc.execute(Command::InsertChar('x')), Redraw::Full);
        assert!(doc.selection().is_empty());
        assert_eq!(doc.lines(), vec!["axbc"]);
    }

    // ── Undo coalescing ─────────────────────────────────────────────

    #[test]
    fn test_typing_run_undoes_as_one() {
        let mut doc = doc(&["x"]);
        doc.set_cursor(pos(0, 1));
        type_str(&mut doc, "hello");
        assert_eq!(doc.history().len(), 1);

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["x"]);
        assert_eq!(doc.cursor().position, pos(0, 1));
        assert!(doc.history().is_empty());
    }

    #[test]
    fn test_enter_breaks_typing_run() {
        let mut doc = doc(&[""]);
        type_str(&mut doc, "ab");
        doc.execute(Command::Enter);
        type_str(&mut doc, "cd");
        assert_eq!(doc.history().len(), 3);

        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["ab", ""]);
        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec!["ab"]);
        doc.execute(Command::Undo);
        assert_eq!(doc.lines(), vec![""]);
    }

    #[test]
    fn test_round_trip_restores_lines_and_cursor() {
        let mut doc = doc(&["hello", "world"]);
        doc.set_cursor(pos(0, 2));
        let before = doc.lines();

        type_str(&mut doc, "xy");
        doc.execute(Command::Enter);
        doc.execute(Command::Tab);
        doc.execute(Command::motion(Motion::Down));
        doc.execute(Command::motion(Motion::Home));
        doc.execute(Command::Backspace);
        doc.execute(Command::Backspace);
        doc.execute(Command::motion(Motion::End));
        doc.execute(Command::Delete);
        doc.execute(Command::Delete);
        type_str(&mut doc, "!");

        while !doc.history().is_empty() {
            doc.execute(Command::Undo);
        }
        assert_eq!(doc.lines(), before);
        assert_eq!(doc.cursor().position, pos(0, 2));
    }
}
