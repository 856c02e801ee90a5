//! Top-level stream dispatcher
//!
//! Reads the whole input one character at a time and routes each one:
//! superblanks to the verbatim copier, chunks to the chunk rewriter,
//! escape pairs and ordinary characters straight through. One pass,
//! no lookahead, no backtracking.

use crate::chunk;
use crate::error::Result;
use crate::reader::CharReader;
use crate::sink;
use crate::span;
use std::io::{BufRead, Write};

/// Opens a chunk
pub const CHUNK_OPEN: char = '^';
/// Terminates a chunk
pub const CHUNK_CLOSE: char = '$';
/// Opens a superblank span
pub const SUPERBLANK_OPEN: char = '[';
/// Terminates a superblank span
pub const SUPERBLANK_CLOSE: char = ']';
/// Escapes the next character
pub const ESCAPE: char = '\\';

/// Rewrite an entire stream from `reader` to `writer`.
///
/// Everything is copied through except chunk bodies, which are rewritten by
/// [`chunk::step`](crate::chunk::step) semantics. An unterminated superblank
/// or chunk aborts the scan with
/// [`RewriteError::UnterminatedSpan`](crate::RewriteError::UnterminatedSpan);
/// output already written stays in the sink.
pub fn rewrite<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let mut chars = CharReader::new(reader);

    while let Some(c) = chars.next_char()? {
        match c {
            SUPERBLANK_OPEN => {
                sink::write_char(&mut writer, SUPERBLANK_OPEN)?;
                span::copy_verbatim(&mut chars, &mut writer, SUPERBLANK_CLOSE)?;
                sink::write_char(&mut writer, SUPERBLANK_CLOSE)?;
            }
            ESCAPE => {
                sink::write_char(&mut writer, ESCAPE)?;
                // End of input right after an escape is tolerated: the
                // escape character is emitted alone.
                if let Some(escaped) = chars.next_char()? {
                    sink::write_char(&mut writer, escaped)?;
                }
            }
            CHUNK_OPEN => {
                sink::write_char(&mut writer, CHUNK_OPEN)?;
                chunk::rewrite_body(&mut chars, &mut writer)?;
                sink::write_char(&mut writer, CHUNK_CLOSE)?;
            }
            other => sink::write_char(&mut writer, other)?,
        }
    }

    Ok(())
}

/// Rewrite an in-memory string, returning the rewritten text.
///
/// Convenience wrapper over [`rewrite`] for in-pipeline string use.
pub fn rewrite_str(input: &str) -> Result<String> {
    let mut out = Vec::with_capacity(input.len());
    rewrite(input.as_bytes(), &mut out)?;
    // The rewriter only ever appends whole characters.
    Ok(String::from_utf8(out).expect("rewriter output is valid UTF-8"))
}
