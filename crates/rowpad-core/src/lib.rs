/// Editing core of the rowpad text editor.
///
/// Holds the line buffer, cursor and viewport, selection, undo history and
/// the composite edit operations that tie them together. Screen output and
/// storage sit behind the `Renderer`, `Loader` and `Saver` traits.
pub mod buffer;
pub mod command;
pub mod cursor;
pub mod document;
pub mod encoding;
pub mod history;
pub mod position;
pub mod render;
pub mod selection;
pub mod viewport;

pub use buffer::TextBuffer;
pub use command::{Command, Motion};
pub use cursor::Cursor;
pub use document::{Document, EditorOptions, FileStore, LoadedText, Loader, Saver, TextFormat};
pub use encoding::{LineEnding, TextEncoding};
pub use position::{Position, Selection, SelectionRange};
pub use render::{Frame, HeadlessRenderer, Redraw, RenderLog, Renderer};
pub use viewport::{ScreenSize, Viewport};
