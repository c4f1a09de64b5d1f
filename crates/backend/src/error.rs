use std::error::Error;

/// The kind of error a backend operation can fail with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The server answered with a non-success status.
    Rejected,
    /// The server could not be reached.
    Network,
    /// Any other errors.
    Other,
}

/// The error type for a backend.
pub trait BackendError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}
