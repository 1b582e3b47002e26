//! Error types for datagen CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for datagen CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists
    #[error("{}: Output file already exists", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Size argument could not be parsed
    #[error("Invalid size '{value}': {reason}")]
    InvalidSize {
        /// The rejected argument
        value: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Generation or writing the output failed
    #[error(transparent)]
    Generation(#[from] datagen_core::Error),
}

/// Specialized `Result` type for datagen CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the reader of the output went away.
    ///
    /// Piping into a command that stops early (`datagen | head`) ends
    /// generation this way; it is not reported as a failure.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Error::Generation(datagen_core::Error::Io(err))
                if err.kind() == io::ErrorKind::BrokenPipe
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::OutputExists { .. } => io::ErrorKind::AlreadyExists,
            Error::InvalidSize { .. } => io::ErrorKind::InvalidInput,
            Error::CreateOutput { source, .. } => source.kind(),
            Error::Generation(datagen_core::Error::Io(source)) => source.kind(),
            Error::Generation(datagen_core::Error::InvalidOption(_)) => {
                io::ErrorKind::InvalidInput
            }
        };
        io::Error::new(kind, err)
    }
}

/// Formats an error message for stderr.
///
/// Returns `None` when the message is suppressed, either because the
/// configured verbosity hides errors or because the error is a closed pipe.
pub fn format_error_for_stderr(
    program: &str,
    verbosity: crate::config::Verbosity,
    err: &Error,
) -> Option<String> {
    if !verbosity.shows_errors() || err.is_broken_pipe() {
        return None;
    }
    Some(format!("{program}: {err}"))
}
