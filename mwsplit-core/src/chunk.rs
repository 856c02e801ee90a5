//! Chunk body rewriting
//!
//! A chunk produced by the lexical-transfer stage may hold a multiword unit
//! whose parts are joined with `+`. The structural-transfer stage expects one
//! morphological unit per chunk, so a join outside a tag has to become a
//! chunk boundary. A `+` inside a `<...>` tag is ordinary tag content.
//!
//! Text preceding the first tag is written to the sink immediately. From the
//! first tag onward, everything is deferred into a chunk-scoped buffer so the
//! join substitution applies uniformly to it; the buffer is appended to the
//! sink as one unit just before the chunk terminator. A `#` ends the deferred
//! phase: subsequent text is written directly again, while any later `+`
//! still appends a split to the buffer.

use crate::error::{Result, RewriteError};
use crate::reader::CharReader;
use crate::sink;
use std::io::{BufRead, Write};

/// Closes the current chunk and opens the next one when emitted
const SPLIT: &str = "$ ^";

/// Emission phase of the chunk rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No tag seen yet; characters go straight to the sink
    #[default]
    Direct,
    /// A tag has been seen; characters are deferred into the chunk buffer
    Buffering,
    /// A `#` ended the deferred phase; characters go straight to the sink,
    /// but a join still appends a split to the buffer
    Queuing,
}

/// Full per-character state of the chunk rewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChunkState {
    /// Current emission phase
    pub phase: Phase,
    /// Whether the cursor is inside a `<...>` tag
    pub in_tag: bool,
}

/// Where one processed character must be emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Write the character straight to the output sink
    Direct(char),
    /// Append the character to the chunk buffer
    Buffered(char),
    /// Append the split text `$ ^` to the chunk buffer
    Split,
}

/// Advance the chunk state machine by one character.
///
/// Pure transition function: the only side effect of chunk rewriting is the
/// emission described by the returned value. State updates happen before the
/// emission is decided, so e.g. a `<` is itself buffered and a `>` is still
/// part of whatever phase it closes.
pub fn step(state: ChunkState, c: char) -> (ChunkState, Emission) {
    let mut next = state;
    match c {
        '<' => {
            next.in_tag = true;
            next.phase = Phase::Buffering;
        }
        // Clears the tag flag even without a matching `<`; degenerate input
        // is accepted silently.
        '>' => next.in_tag = false,
        '#' if state.phase == Phase::Buffering => next.phase = Phase::Queuing,
        _ => {}
    }

    let emission = match next.phase {
        Phase::Buffering => {
            if c == '+' && !next.in_tag {
                Emission::Split
            } else {
                Emission::Buffered(c)
            }
        }
        Phase::Queuing if c == '+' => Emission::Split,
        Phase::Queuing | Phase::Direct => Emission::Direct(c),
    };

    (next, emission)
}

/// Rewrite one chunk body.
///
/// Consumes characters up to and including the terminating `$`, which is not
/// written; the dispatcher emits it after this returns, so the buffer always
/// lands immediately before the terminator. Fails with
/// [`RewriteError::UnterminatedSpan`] if the input ends first.
pub(crate) fn rewrite_body<R: BufRead, W: Write>(
    reader: &mut CharReader<R>,
    writer: &mut W,
) -> Result<()> {
    let mut state = ChunkState::default();
    let mut buffer = String::new();

    loop {
        let c = match reader.next_char()? {
            Some(c) => c,
            None => {
                return Err(RewriteError::UnterminatedSpan {
                    terminator: crate::rewriter::CHUNK_CLOSE,
                })
            }
        };
        if c == crate::rewriter::CHUNK_CLOSE {
            break;
        }

        let (next, emission) = step(state, c);
        state = next;
        match emission {
            Emission::Direct(c) => sink::write_char(writer, c)?,
            Emission::Buffered(c) => buffer.push(c),
            Emission::Split => buffer.push_str(SPLIT),
        }
    }

    // Deferred content trails everything written directly in this chunk.
    sink::write_str(writer, &buffer)?;
    Ok(())
}
