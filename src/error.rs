//! Error types surfaced to the command line

use thiserror::Error;

use crate::duration::DurationError;

/// Errors that stop a timer run before it starts
#[derive(Debug, Error)]
pub enum TimerError {
    /// The DURATION argument could not be parsed
    #[error("invalid duration '{input}'")]
    InvalidDuration {
        input: String,
        #[source]
        source: DurationError,
    },
}
