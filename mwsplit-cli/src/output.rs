//! Output stream selection and flush policy

use anyhow::Context;
use crate::error::CliResult;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Build the output writer from an optional path argument.
///
/// `None` or `-` selects stdout; anything else is created as a file.
pub fn open(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let file = File::create(p)
                .with_context(|| format!("failed to create output file: {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Writer adapter that flushes after every NUL byte.
///
/// The rewriter copies NUL characters through like any other character;
/// flushing on document boundaries is a policy of the surrounding pipeline,
/// so it lives here rather than in the core.
pub struct NullFlushWriter<W: Write> {
    inner: W,
}

impl<W: Write> NullFlushWriter<W> {
    /// Wrap a writer in the null-flush policy
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap, returning the inner writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for NullFlushWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.iter().position(|&b| b == 0) {
            Some(i) => {
                // Write up to and including the NUL, then flush. Any
                // remainder is the caller's next write.
                let written = self.inner.write(&buf[..=i])?;
                if written == i + 1 {
                    self.inner.flush()?;
                }
                Ok(written)
            }
            None => self.inner.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that records how many times it has been flushed
    struct FlushCounter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl FlushCounter {
        fn new() -> Self {
            Self {
                data: Vec::new(),
                flushes: 0,
            }
        }
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_data_without_nul_is_not_flushed() {
        let mut writer = NullFlushWriter::new(FlushCounter::new());
        writer.write_all(b"no boundaries here").unwrap();

        let inner = writer.into_inner();
        assert_eq!(inner.data, b"no boundaries here");
        assert_eq!(inner.flushes, 0);
    }

    #[test]
    fn test_flushes_once_per_nul() {
        let mut writer = NullFlushWriter::new(FlushCounter::new());
        writer.write_all(b"doc one\0doc two\0tail").unwrap();

        let inner = writer.into_inner();
        assert_eq!(inner.data, b"doc one\0doc two\0tail");
        assert_eq!(inner.flushes, 2);
    }

    #[test]
    fn test_nul_bytes_are_preserved() {
        let mut writer = NullFlushWriter::new(FlushCounter::new());
        writer.write_all(b"\0\0").unwrap();

        let inner = writer.into_inner();
        assert_eq!(inner.data, b"\0\0");
        assert_eq!(inner.flushes, 2);
    }

    #[test]
    fn test_explicit_flush_passes_through() {
        let mut writer = NullFlushWriter::new(FlushCounter::new());
        writer.write_all(b"tail").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.into_inner().flushes, 1);
    }

    #[test]
    fn test_output_open_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut writer = open(Some(&path)).unwrap();
        writer.write_all(b"written").unwrap();
        writer.flush().unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "written");
    }

    #[test]
    fn test_output_open_rejects_bad_path() {
        let err = open(Some(Path::new("/nonexistent/dir/out.txt")))
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to create output file"));
    }
}
