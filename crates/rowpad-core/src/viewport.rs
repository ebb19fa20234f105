//! Scroll offset of the visible window.
//!
//! Scrolling is never smoothed or centered: the viewport moves by the
//! minimal amount that brings the cursor back into view.
use crate::position::Position;

/// Size of the visible text area in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Visible columns, at least 1.
    pub width: usize,
    /// Visible rows, at least 1.
    pub height: usize,
}

impl ScreenSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Rows a page move jumps by. One row of the previous page stays
    /// visible.
    pub fn page_lines(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Top-left visible cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible row.
    pub top: usize,
    /// First visible column.
    pub left: usize,
}

impl Viewport {
    /// Returns true if `cursor` lies outside the window, so that scrolling
    /// and a full redraw are needed.
    pub fn must_adjust(&self, cursor: Position, size: ScreenSize) -> bool {
        cursor.line >= self.top + size.height
            || cursor.line < self.top
            || cursor.col >= self.left + size.width
            || cursor.col < self.left
    }

    /// Scrolls so that `cursor` is visible. Returns true if the viewport
    /// moved.
    pub fn adjust(&mut self, cursor: Position, size: ScreenSize) -> bool {
        let before = *self;
        if cursor.line >= self.top + size.height {
            self.top = cursor.line + 1 - size.height;
        }
        if cursor.line < self.top {
            self.top = cursor.line;
        }
        if cursor.col >= self.left + size.width {
            self.left = cursor.col + 1 - size.width;
        }
        if cursor.col < self.left {
            self.left = cursor.col;
        }
        let moved = *self != before;
        if moved {
            tracing::trace!(top = self.top, left = self.left, "viewport scrolled");
        }
        moved
    }
}
