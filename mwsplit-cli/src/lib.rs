//! mwsplit CLI library
//!
//! This library provides the command-line interface for the mwsplit
//! stream rewriter: input/output stream selection and the null-flush
//! output policy. The rewriting itself lives in `mwsplit-core`.

pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
