//! Error types for the rewriter

use thiserror::Error;

/// Errors produced while rewriting a stream
#[derive(Error, Debug)]
pub enum RewriteError {
    /// Input ended before the expected terminator was seen
    #[error("unexpected end of input: expected '{terminator}'")]
    UnterminatedSpan {
        /// The terminator character that was never found
        terminator: char,
    },

    /// I/O error from the underlying source or sink
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding error (invalid UTF-8 in the input stream)
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for RewriteError {
    fn from(err: std::io::Error) -> Self {
        RewriteError::Io(err.to_string())
    }
}

/// Result type for rewriter operations
pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_span_display() {
        let err = RewriteError::UnterminatedSpan { terminator: '$' };
        assert_eq!(err.to_string(), "unexpected end of input: expected '$'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RewriteError = io_err.into();
        assert!(matches!(err, RewriteError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
