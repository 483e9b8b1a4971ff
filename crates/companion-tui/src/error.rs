//! Error types for the terminal front end.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can stop the terminal UI.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Raw mode, alternate screen, drawing or event reading failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The requested log file could not be opened.
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}
