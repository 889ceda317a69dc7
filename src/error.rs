//! Error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a teleprompter session.
///
/// None of these are retried: the engine itself never fails, so anything
/// that reaches this type is a problem with the file or the terminal.
#[derive(Debug, Error)]
pub enum Error {
    /// The text to present could not be read.
    #[error("error when reading file {}: {source}", path.display())]
    SourceRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Terminal setup or frame output failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Restoring the terminal on close failed.
    #[error("failed to close the window: {0}")]
    WindowDestroy(#[source] io::Error),
}

/// Result alias for teleprompter operations.
pub type Result<T> = std::result::Result<T, Error>;
