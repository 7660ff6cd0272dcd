use std::collections::TryReserveError;
use std::fmt;
use std::io;

/// Unified error type for payload and list operations.
#[derive(Debug)]
pub enum Error {
    /// An operation received an absent input it requires.
    /// Carries the name of the operation.
    NullInput(&'static str),
    /// Storage for a payload or list node could not be obtained.
    OutOfMemory,
    /// IO error from the rendering sink.
    Io(io::Error),
    /// A payload refused to release itself.
    Release(String),
    /// A teardown sweep finished but some payloads failed to release.
    PartialRelease(Vec<ReleaseFailure>),
}

/// One failed release during a list teardown.
#[derive(Debug)]
pub struct ReleaseFailure {
    /// Position of the payload in traversal order.
    pub position: usize,
    pub error: Error,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NullInput(op) => write!(f, "{op}: missing input"),
            Error::OutOfMemory => write!(f, "Out of memory"),
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::Release(msg) => write!(f, "Release failed: {msg}"),
            Error::PartialRelease(failed) => {
                write!(f, "{} payload(s) failed to release", failed.len())?;
                if let Some(first) = failed.first() {
                    write!(f, " (first at position {}: {})", first.position, first.error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
