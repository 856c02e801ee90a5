//! Input stream selection

use crate::error::{CliError, CliResult};
use mwsplit_core::Input;
use std::io;
use std::path::Path;

/// Build the rewriter input from an optional path argument.
///
/// `None` or `-` selects stdin; anything else is treated as a file path.
pub fn open(path: Option<&Path>) -> CliResult<Input> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            if !p.is_file() {
                return Err(CliError::FileNotFound(p.display().to_string()).into());
            }
            Ok(Input::from_file(p.to_path_buf()))
        }
        _ => Ok(Input::from_reader(io::stdin())),
    }
}
