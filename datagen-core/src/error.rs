//! Error types and result handling for data generation.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a generation run.
///
/// Parameter values outside their range are clamped rather than rejected, so
/// apart from the block size every failure comes from the output destination.
#[derive(Debug)]
pub enum Error {
    /// Writing generated bytes to the destination failed.
    Io(std::io::Error),

    /// Invalid option supplied by the caller.
    InvalidOption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::InvalidOption(message) => write!(f, "invalid option: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidOption(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) => err,
            Error::InvalidOption(_) => std::io::Error::new(std::io::ErrorKind::InvalidInput, err),
        }
    }
}
