//! Renderer contract: what the core hands to whoever paints the screen.
//!
//! The core never performs screen I/O. Operations return a [`Redraw`] hint
//! and [`Document::present`](crate::document::Document::present) passes a
//! read-only [`Frame`] to the injected [`Renderer`].
use std::cell::RefCell;
use std::rc::Rc;

use crate::buffer::{head, tail, TextBuffer};
use crate::position::{Position, Selection};
use crate::viewport::{ScreenSize, Viewport};

/// How much of the screen must be repainted after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Redraw {
    /// Nothing visible changed apart from the cursor.
    #[default]
    None,
    /// Only the given absolute row changed.
    Line(usize),
    /// Everything must be repainted.
    Full,
}

impl Redraw {
    /// Combines two hints. `Full` dominates; two different rows escalate to
    /// `Full`.
    #[must_use]
    pub fn merge(self, other: Redraw) -> Redraw {
        match (self, other) {
            (Redraw::None, r) | (r, Redraw::None) => r,
            (Redraw::Line(a), Redraw::Line(b)) if a == b => Redraw::Line(a),
            _ => Redraw::Full,
        }
    }
}

/// Read-only view of the document state handed to a renderer.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub buffer: &'a TextBuffer,
    pub cursor: Position,
    pub viewport: Viewport,
    pub selection: Selection,
    pub redraw: Redraw,
}

impl Frame<'_> {
    /// Returns the visible part of each row in the window, starting at the
    /// viewport's top row. Columns are counted in chars.
    pub fn visible_rows(&self, size: ScreenSize) -> Vec<(usize, String)> {
        let last = (self.viewport.top + size.height).min(self.buffer.len_lines());
        (self.viewport.top..last)
            .map(|row| {
                let line = self.buffer.line(row);
                let shown = head(tail(&line, self.viewport.left), size.width).to_string();
                (row, shown)
            })
            .collect()
    }

    /// Cursor position relative to the window.
    pub fn screen_cursor(&self) -> (usize, usize) {
        (
            self.cursor.col.saturating_sub(self.viewport.left),
            self.cursor.line.saturating_sub(self.viewport.top),
        )
    }
}

/// Something that can paint a document.
pub trait Renderer {
    /// Current size of the text area.
    fn size(&self) -> ScreenSize;

    /// Paints `frame`, honouring its redraw hint.
    fn draw(&mut self, frame: &Frame<'_>);
}

/// What a [`HeadlessRenderer`] observed.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    /// Number of frames presented.
    pub frames: usize,
    /// Frames that asked for a full repaint.
    pub full: usize,
    /// Frames that asked for a single line.
    pub lines: usize,
    /// Hint of the most recent frame.
    pub last: Redraw,
    /// Visible rows as of the most recent frame.
    pub screen: Vec<String>,
    /// Cursor relative to the window as of the most recent frame.
    pub cursor: (usize, usize),
}

/// A renderer that paints nothing and records what it was given.
///
/// Used by tests and by the headless binary.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    size: ScreenSize,
    log: Rc<RefCell<RenderLog>>,
}

impl HeadlessRenderer {
    pub fn new(size: ScreenSize) -> Self {
        Self {
            size,
            log: Rc::new(RefCell::new(RenderLog::default())),
        }
    }

    /// Shared handle to the log, readable after the renderer was moved into
    /// a document.
    pub fn log(&self) -> Rc<RefCell<RenderLog>> {
        Rc::clone(&self.log)
    }
}

impl Renderer for HeadlessRenderer {
    fn size(&self) -> ScreenSize {
        self.size
    }

    fn draw(&mut self, frame: &Frame<'_>) {
        let mut log = self.log.borrow_mut();
        log.frames += 1;
        match frame.redraw {
            Redraw::Full => log.full += 1,
            Redraw::Line(_) => log.lines += 1,
            Redraw::None => {}
        }
        log.last = frame.redraw;
        log.screen = frame
            .visible_rows(self.size)
            .into_iter()
            .map(|(_, text)| text)
            .collect();
        log.cursor = frame.screen_cursor();
    }
}
