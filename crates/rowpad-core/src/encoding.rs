//! Encoding and line-ending handling for file I/O.
use anyhow::{Context, Result};

/// Supported text encodings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    /// A named encoding from `encoding_rs` (e.g., "windows-1252").
    Legacy(&'static str),
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf8Bom => write!(f, "UTF-8 BOM"),
            Self::Utf16Le => write!(f, "UTF-16 LE"),
            Self::Utf16Be => write!(f, "UTF-16 BE"),
            Self::Legacy(name) => write!(f, "{name}"),
        }
    }
}

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Line terminator used when writing a document back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n` (Unix/macOS)
    Lf,
    /// `\r\n` (Windows)
    CrLf,
    /// `\r` (Classic Mac)
    Cr,
}

impl Default for LineEnding {
    fn default() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }
}

/// Detects the encoding of raw bytes: BOM first, then UTF-8, then a
/// `chardetng` guess.
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(&UTF8_BOM) {
        return TextEncoding::Utf8Bom;
    }
    if bytes.starts_with(&UTF16_LE_BOM) {
        return TextEncoding::Utf16Le;
    }
    if bytes.starts_with(&UTF16_BE_BOM) {
        return TextEncoding::Utf16Be;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return TextEncoding::Utf8;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    TextEncoding::Legacy(detector.guess(None, true).name())
}

/// Decodes raw bytes into a String using the specified encoding.
///
/// # Errors
///
/// Returns an error if the bytes are not valid in that encoding.
pub fn decode_bytes(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec()).context("invalid UTF-8 content"),
        TextEncoding::Utf8Bom => {
            let content = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
            String::from_utf8(content.to_vec()).context("invalid UTF-8 BOM content")
        }
        TextEncoding::Utf16Le => {
            let content = bytes.strip_prefix(&UTF16_LE_BOM).unwrap_or(bytes);
            let units: Vec<u16> = content
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).context("invalid UTF-16 LE content")
        }
        TextEncoding::Utf16Be => {
            let content = bytes.strip_prefix(&UTF16_BE_BOM).unwrap_or(bytes);
            let units: Vec<u16> = content
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).context("invalid UTF-16 BE content")
        }
        TextEncoding::Legacy(name) => {
            let encoding = encoding_rs::Encoding::for_label(name.as_bytes())
                .with_context(|| format!("unknown encoding: {name}"))?;
            let (decoded, _, had_errors) = encoding.decode(bytes);
            if had_errors {
                anyhow::bail!("encoding errors while decoding as {name}");
            }
            Ok(decoded.into_owned())
        }
    }
}

/// Encodes a string into bytes using the specified encoding. BOM
/// encodings get their BOM written back.
///
/// # Errors
///
/// Returns an error if the text cannot be represented in a legacy
/// encoding.
pub fn encode_string(text: &str, encoding: TextEncoding) -> Result<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Utf8Bom => {
            let mut bytes = UTF8_BOM.to_vec();
            bytes.extend_from_slice(text.as_bytes());
            Ok(bytes)
        }
        TextEncoding::Utf16Le => {
            let mut bytes = UTF16_LE_BOM.to_vec();
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            Ok(bytes)
        }
        TextEncoding::Utf16Be => {
            let mut bytes = UTF16_BE_BOM.to_vec();
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_be_bytes());
            }
            Ok(bytes)
        }
        TextEncoding::Legacy(name) => {
            let encoding = encoding_rs::Encoding::for_label(name.as_bytes())
                .with_context(|| format!("unknown encoding: {name}"))?;
            let (encoded, _, had_errors) = encoding.encode(text);
            if had_errors {
                anyhow::bail!("text cannot be represented as {name}");
            }
            Ok(encoded.into_owned())
        }
    }
}

/// Detects the line ending style from the first terminator in `text`.
/// Text without any terminator counts as LF.
pub fn detect_line_ending(text: &str) -> LineEnding {
    let Some(at) = text.find(['\n', '\r']) else {
        return LineEnding::Lf;
    };
    match &text[at..] {
        rest if rest.starts_with("\r\n") => LineEnding::CrLf,
        rest if rest.starts_with('\r') => LineEnding::Cr,
        _ => LineEnding::Lf,
    }
}

/// Splits text into lines on `\n` and on `ending`. A CR that is not part
/// of `ending` stays line content. A single trailing terminator does not
/// start an extra line; empty text is one empty line.
pub fn split_lines(text: &str, ending: LineEnding) -> Vec<String> {
    let normalized = match ending {
        LineEnding::Lf => text.to_string(),
        LineEnding::CrLf => text.replace("\r\n", "\n"),
        LineEnding::Cr => text.replace("\r\n", "\n").replace('\r', "\n"),
    };
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
    body.split('\n').map(str::to_string).collect()
}

/// Joins lines with `ending`, optionally terminating the last one too.
pub fn join_lines(lines: &[String], ending: LineEnding, trailing_newline: bool) -> String {
    let mut text = lines.join(ending.as_str());
    if trailing_newline {
        text.push_str(ending.as_str());
    }
    text
}
