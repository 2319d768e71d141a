//! CLI error types

use thiserror::Error;

/// Errors that can occur in the console layer
///
/// Domain failures never surface here; they are rendered as one-line
/// messages and the menu continues. Only the IO channel itself can take
/// the application down.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input stream reached end-of-file mid-session
    #[error("Input stream closed")]
    InputClosed,

    /// Reading or writing the console failed
    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),
}
