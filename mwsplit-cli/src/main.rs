//! mwsplit — split multiword chunks between transfer stages
//!
//! Reads a lexical-transfer stream from a file or stdin, splits multiword
//! lexical units into separate chunks, and writes the result to a file or
//! stdout. Designed to sit in the middle of a translation pipeline.

use anyhow::Result;
use clap::Parser;
use mwsplit_cli::error::CliError;
use mwsplit_cli::{input, output};
use std::io::Write;
use std::path::PathBuf;
use std::process;

/// Split multiword lexical units into separate chunks
#[derive(Debug, Parser)]
#[command(name = "mwsplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (default: stdin; "-" also selects stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (default: stdout; "-" also selects stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Flush output after each NUL-delimited block
    #[arg(short = 'z', long)]
    null_flush: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    cli.init_logging();

    log::info!("starting stream rewrite");
    log::debug!("arguments: {cli:?}");

    let reader = input::open(cli.input.as_deref())?.into_reader()?;
    let mut writer = output::open(cli.output.as_deref())?;

    if cli.null_flush {
        let mut writer = output::NullFlushWriter::new(writer);
        mwsplit_core::rewrite(reader, &mut writer)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        writer.flush()?;
    } else {
        mwsplit_core::rewrite(reader, &mut writer)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        writer.flush()?;
    }

    log::info!("stream rewrite complete");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("mwsplit: {err:#}");
        process::exit(1);
    }
}
