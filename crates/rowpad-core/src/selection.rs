//! Selection controller: anchor/extend model driven by cursor motion.
//!
//! The caret sits between cells while the selection stores inclusive
//! cells, so the last selected cell is the one just before a caret that
//! moved right. Column `len` of a row stands for its line break.
use crate::buffer::TextBuffer;
use crate::position::{Position, Selection, SelectionRange};
use crate::render::Redraw;

/// Returns the cell just before the caret at `pos`, or `None` at the very
/// start of the buffer. Before column 0 lies the line break of the
/// previous row.
pub fn cell_before(pos: Position, buffer: &TextBuffer) -> Option<Position> {
    if pos.col > 0 {
        Some(Position::new(pos.line, pos.col - 1))
    } else if pos.line > 0 {
        let line = pos.line - 1;
        Some(Position::new(line, buffer.line_len(line)))
    } else {
        None
    }
}

impl Selection {
    /// Drops an active selection. Clearing a single-row range only needs
    /// that row repainted.
    pub fn clear(&mut self) -> Redraw {
        match self.range() {
            None => Redraw::None,
            Some(range) => {
                *self = Selection::Empty;
                if range.is_multi_line() {
                    Redraw::Full
                } else {
                    Redraw::Line(range.begin().line)
                }
            }
        }
    }

    /// Updates the selection after a cursor motion from `prev` to `cur`.
    ///
    /// Without `extend` an active selection is dropped. With `extend` the
    /// selection is anchored or grown towards `cur`; a range that ends
    /// before it begins collapses to empty.
    pub fn update(
        &mut self,
        extend: bool,
        prev: Position,
        cur: Position,
        buffer: &TextBuffer,
    ) -> Redraw {
        if !extend {
            return self.clear();
        }

        let before = *self;
        let (begin, end) = match self.range() {
            None if cur > prev => (prev, cell_before(cur, buffer)),
            None => (cur, cell_before(prev, buffer)),
            Some(range) if cur >= range.end() => (range.begin(), cell_before(cur, buffer)),
            Some(range) => (cur, Some(range.end())),
        };

        *self = match end {
            Some(end) if end >= begin => Selection::Range(SelectionRange::new(begin, end)),
            _ => Selection::Empty,
        };

        if *self == before {
            Redraw::None
        } else {
            Redraw::Full
        }
    }
}
