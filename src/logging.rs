//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; this module decides where they go.
//! Verbosity picks the default level and `RUST_LOG` overrides it when set.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log output should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    /// Append to the given file.
    File(&'a Path),
    /// Write to stderr. Only safe when no full-screen UI owns the terminal.
    Stderr,
    /// Drop everything.
    Discard,
}

pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber. Calling this twice is an error.
pub fn init_tracing(verbosity: u8, sink: LogSink<'_>) -> Result<(), Box<dyn Error>> {
    let filter = build_filter(verbosity);

    match sink {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })?;
        }
        LogSink::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| -> Box<dyn Error> { err })?;
        }
        LogSink::Discard => {}
    }

    Ok(())
}
