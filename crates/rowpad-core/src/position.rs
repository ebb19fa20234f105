//! Coordinate model: positions, their total order, and selection ranges.
use std::cmp::Ordering;

/// Represents a position in the text as line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// 0-indexed line number (row).
    pub line: usize,
    /// 0-indexed column (char offset within the line).
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Returns true if this position lies inside `selection`, both ends
    /// inclusive. Always false for an empty selection.
    pub fn in_selection(&self, selection: &Selection) -> bool {
        match selection {
            Selection::Empty => false,
            Selection::Range(range) => range.contains(*self),
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    /// Rows first, then columns.
    fn cmp(&self, other: &Self) -> Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

/// A non-empty selected range. Both endpoints are inclusive cells and
/// `begin <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    begin: Position,
    end: Position,
}

impl SelectionRange {
    /// Creates a range covering `a..=b`, ordering the endpoints.
    pub fn new(a: Position, b: Position) -> Self {
        if b < a {
            Self { begin: b, end: a }
        } else {
            Self { begin: a, end: b }
        }
    }

    /// First selected cell.
    pub fn begin(&self) -> Position {
        self.begin
    }

    /// Last selected cell.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns true if `pos` is within `begin..=end`.
    pub fn contains(&self, pos: Position) -> bool {
        self.begin <= pos && pos <= self.end
    }

    /// Returns true if the range spans more than one row.
    pub fn is_multi_line(&self) -> bool {
        self.begin.line != self.end.line
    }
}

/// Current selection of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    Empty,
    /// An active inclusive range.
    Range(SelectionRange),
}

impl Selection {
    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the active range, if any.
    pub fn range(&self) -> Option<SelectionRange> {
        match self {
            Self::Empty => None,
            Self::Range(range) => Some(*range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(begin: Position, end: Position) -> Selection {
        Selection::Range(SelectionRange::new(begin, end))
    }

    // ── Position ordering ────────────────────────────────────────────

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 0) < Position::new(0, 1));
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
        assert!(Position::new(3, 0) > Position::new(2, 80));
        assert!(Position::new(2, 3) >= Position::new(2, 3));
        assert!(Position::new(2, 3) <= Position::new(2, 3));
        assert_eq!(Position::new(2, 3), Position::new(2, 3));
    }

    // ── Containment ──────────────────────────────────────────────────

    #[test]
    fn test_single_line_selection_containment() {
        let sel = range(Position::new(2, 2), Position::new(2, 4));
        assert!(Position::new(2, 2).in_selection(&sel));
        assert!(Position::new(2, 3).in_selection(&sel));
        assert!(Position::new(2, 4).in_selection(&sel));
        assert!(!Position::new(2, 1).in_selection(&sel));
        assert!(!Position::new(2, 5).in_selection(&sel));
        assert!(!Position::new(1, 3).in_selection(&sel));
        assert!(!Position::new(3, 3).in_selection(&sel));
    }

    #[test]
    fn test_multi_line_selection_containment() {
        let sel = range(Position::new(2, 10), Position::new(4, 5));
        assert!(Position::new(2, 11).in_selection(&sel));
        assert!(Position::new(2, 10).in_selection(&sel));
        assert!(!Position::new(2, 9).in_selection(&sel));
        for col in [0, 1, 50, 1000] {
            assert!(Position::new(3, col).in_selection(&sel));
        }
        assert!(Position::new(4, 4).in_selection(&sel));
        assert!(Position::new(4, 0).in_selection(&sel));
        assert!(Position::new(4, 5).in_selection(&sel));
        assert!(!Position::new(4, 6).in_selection(&sel));
    }

    #[test]
    fn test_empty_selection_contains_nothing() {
        let sel = Selection::Empty;
        assert!(!Position::new(0, 0).in_selection(&sel));
        assert!(sel.is_empty());
        assert!(sel.range().is_none());
    }

    // ── Range ordering ───────────────────────────────────────────────

    #[test]
    fn test_range_orders_endpoints() {
        let r = SelectionRange::new(Position::new(4, 5), Position::new(2, 10));
        assert_eq!(r.begin(), Position::new(2, 10));
        assert_eq!(r.end(), Position::new(4, 5));
        assert!(r.is_multi_line());
        assert!(r.contains(Position::new(3, 0)));
    }

    #[test]
    fn test_single_cell_range() {
        let p = Position::new(1, 1);
        let r = SelectionRange::new(p, p);
        assert!(r.contains(p));
        assert!(!r.is_multi_line());
        assert!(!r.contains(Position::new(1, 2)));
    }
}
