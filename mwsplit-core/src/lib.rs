//! Tag-aware multiword chunk splitting for shallow-transfer translation streams.
//!
//! This crate rewrites the stream produced by a lexical-transfer stage into the
//! form expected by a structural-transfer stage. Almost everything passes
//! through unchanged; the two exceptions are:
//!
//! - superblanks (`[...]`) and escape pairs (`\x`) are copied verbatim, and
//! - multiword lexical units inside a `^...$` chunk, joined with `+`, are
//!   split into separate chunks (`^foo<n>+bar$` becomes `^foo<n>$ ^bar$`),
//!   while a `+` inside a `<...>` tag is left untouched.
//!
//! Processing is a single forward pass over Unicode scalar values with no
//! backtracking. Memory use is bounded by the size of one chunk.
//!
//! # Example
//!
//! ```
//! let output = mwsplit_core::rewrite_str("^foo<n>+bar$").unwrap();
//! assert_eq!(output, "^foo<n>$ ^bar$");
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod error;
pub mod input;
pub mod reader;
pub mod rewriter;
pub mod span;

mod sink;

pub use error::{Result, RewriteError};
pub use input::Input;
pub use reader::CharReader;
pub use rewriter::{rewrite, rewrite_str};
