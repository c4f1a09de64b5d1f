use std::error::Error;
use std::fmt;

/// Returned when sending to an actor that has already stopped.
pub struct StoppedError;

impl fmt::Debug for StoppedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoppedError").finish()
    }
}

impl fmt::Display for StoppedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "the actor has stopped".fmt(f)
    }
}

impl Error for StoppedError {}
