//! File I/O operations for documents.
//!
//! Loading and saving go through the [`Loader`] and [`Saver`] traits so the
//! document never touches the filesystem directly. [`FileStore`] is the
//! disk-backed implementation with encoding and line-ending detection.

use std::path::Path;

use anyhow::{Context, Result};

use crate::encoding::{
    decode_bytes, detect_encoding, detect_line_ending, encode_string, join_lines, split_lines,
    LineEnding, TextEncoding,
};
use crate::render::Renderer;

use super::{Document, EditorOptions};

/// Lines read from storage together with the format they were stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub lines: Vec<String>,
    pub encoding: TextEncoding,
    pub line_ending: LineEnding,
}

/// How lines are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat {
    pub encoding: TextEncoding,
    pub line_ending: LineEnding,
}

/// Source of document lines.
pub trait Loader {
    /// Reads the lines stored at `path`.
    ///
    /// Returns `Ok(None)` if nothing exists there yet.
    ///
    /// # Errors
    ///
    /// Returns an error for any other read or decode failure.
    fn load(&self, path: &Path) -> Result<Option<LoadedText>>;
}

/// Sink for document lines.
pub trait Saver {
    /// Writes `lines` to `path` in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lines cannot be encoded or written.
    fn save(&self, path: &Path, lines: &[String], format: TextFormat) -> Result<()>;
}

/// Reads and writes plain text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStore {
    /// Terminate the last line when saving.
    pub trailing_newline: bool,
}

impl Default for FileStore {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

impl Loader for FileStore {
    fn load(&self, path: &Path) -> Result<Option<LoadedText>> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("{} does not exist, starting empty", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read file: {}", path.display()))
            }
        };

        let encoding = detect_encoding(&bytes);
        let text = decode_bytes(&bytes, encoding)
            .with_context(|| format!("failed to decode file: {}", path.display()))?;
        let line_ending = detect_line_ending(&text);
        let lines = split_lines(&text, line_ending);
        tracing::debug!(
            path = %path.display(),
            %encoding,
            lines = lines.len(),
            "loaded file"
        );

        Ok(Some(LoadedText {
            lines,
            encoding,
            line_ending,
        }))
    }
}

impl Saver for FileStore {
    fn save(&self, path: &Path, lines: &[String], format: TextFormat) -> Result<()> {
        let text = join_lines(lines, format.line_ending, self.trailing_newline);
        let bytes = encode_string(&text, format.encoding)
            .context("failed to encode document for saving")?;
        std::fs::write(path, &bytes)
            .with_context(|| format!("failed to write file: {}", path.display()))
    }
}

impl Document {
    /// Opens the document stored at `path`. A missing file yields an empty
    /// document that will be saved to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails for any reason other than the
    /// file not existing.
    pub fn open(
        path: &Path,
        loader: &dyn Loader,
        renderer: Box<dyn Renderer>,
        options: EditorOptions,
    ) -> Result<Self> {
        let mut doc = match loader.load(path)? {
            Some(loaded) => {
                let mut doc = Self::from_lines(&loaded.lines, renderer, options);
                doc.encoding = loaded.encoding;
                doc.line_ending = loaded.line_ending;
                doc
            }
            None => Self::new(renderer, options),
        };
        doc.file_path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Saves the document to its file path.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is set or the saver fails.
    pub fn save(&mut self, saver: &dyn Saver) -> Result<()> {
        let path = self
            .file_path
            .as_ref()
            .context("no file path set for this document")?
            .clone();
        self.save_to(&path, saver)
    }

    /// Saves the document to a specific path, which becomes its file path.
    ///
    /// On failure nothing in the document changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the saver fails.
    pub fn save_to(&mut self, path: &Path, saver: &dyn Saver) -> Result<()> {
        let format = TextFormat {
            encoding: self.encoding,
            line_ending: self.line_ending,
        };
        if let Err(e) = saver.save(path, &self.lines(), format) {
            tracing::warn!("failed to save {}: {e:#}", path.display());
            return Err(e);
        }

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        self.last_saved_at = Some(chrono::Local::now());
        tracing::info!("saved {}", path.display());
        Ok(())
    }
}
