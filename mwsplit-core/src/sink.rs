//! Output sink helpers

use crate::error::Result;
use std::io::Write;

/// Append a single character to the sink
pub(crate) fn write_char<W: Write>(writer: &mut W, c: char) -> Result<()> {
    let mut buf = [0u8; 4];
    writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
    Ok(())
}

/// Append a string to the sink
pub(crate) fn write_str<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writer.write_all(s.as_bytes())?;
    Ok(())
}
