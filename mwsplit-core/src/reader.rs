//! Pull-based character cursor over a byte stream
//!
//! The rewriter consumes input one Unicode scalar value at a time with no
//! lookahead. `CharReader` decodes UTF-8 incrementally so arbitrarily long
//! input can be processed in bounded memory.

use crate::error::{Result, RewriteError};
use std::io::{self, BufRead};

/// Incremental UTF-8 decoder over a buffered byte reader
pub struct CharReader<R> {
    inner: R,
    /// Byte offset of the next character, for diagnostics
    offset: u64,
}

impl<R: BufRead> CharReader<R> {
    /// Create a new character reader
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Read the next Unicode scalar value
    ///
    /// Returns `Ok(None)` once the underlying stream is exhausted. End of
    /// input is an ordinary condition here; whether it is an error depends
    /// on what the caller was scanning for.
    pub fn next_char(&mut self) -> Result<Option<char>> {
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        if first < 0x80 {
            self.offset += 1;
            return Ok(Some(first as char));
        }

        let len = match first {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => {
                return Err(RewriteError::Encoding(format!(
                    "invalid UTF-8 byte 0x{first:02X} at offset {}",
                    self.offset
                )))
            }
        };

        let mut buf = [first, 0, 0, 0];
        self.inner.read_exact(&mut buf[1..len]).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                RewriteError::Encoding(format!(
                    "truncated UTF-8 sequence at offset {}",
                    self.offset
                ))
            } else {
                RewriteError::Io(e.to_string())
            }
        })?;

        let decoded = std::str::from_utf8(&buf[..len]).map_err(|_| {
            RewriteError::Encoding(format!("invalid UTF-8 sequence at offset {}", self.offset))
        })?;
        self.offset += len as u64;
        Ok(decoded.chars().next())
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(RewriteError::Io(e.to_string())),
            }
        }
    }
}
