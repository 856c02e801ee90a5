//! Input abstraction for stream rewriting
//!
//! Provides a unified interface for feeding the rewriter from various
//! sources without materializing the whole input in memory.

use crate::error::{Result, RewriteError};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;

/// Unified input abstraction
///
/// Supports various input sources while providing a consistent interface
/// for the rewriter. File and reader inputs are consumed incrementally.
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to process as UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream (for stdin, pipes, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Convert the input into a buffered byte reader
    ///
    /// Files are opened lazily here; in-memory variants are wrapped in a
    /// cursor. The rewriter pulls characters from the returned reader one
    /// at a time.
    pub fn into_reader(self) -> Result<Box<dyn BufRead + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            Input::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes))),
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    RewriteError::Io(format!("failed to open file {}: {e}", path.display()))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Input::Reader(reader) => Ok(Box::new(BufReader::new(reader))),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}
