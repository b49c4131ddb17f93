use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Every operation reports success or one of these variants; see [`Error::kind`] for the
/// coarse classification.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[display("expected {expected} segment pins (plus an optional extension pin), got {actual}")]
    SegmentPinCount { expected: usize, actual: usize },

    #[display("digit pin count {_0} is outside 1..={}", crate::MAX_DIGITS)]
    DigitPinCount(#[error(not(source))] usize),

    #[display("Error setting output state")]
    CannotSetOutputState,

    #[display("Scheduler could not start the activity")]
    TaskSpawn,

    #[display("Text must not be empty")]
    EmptyText,

    #[display("Text is longer than {} characters", crate::TEXT_CAPACITY)]
    TextTooLong,

    #[display("Position {_0} is outside the display")]
    PositionOutOfRange(#[error(not(source))] usize),

    #[display("Scrolling is not configured")]
    ScrollNotConfigured,

    #[display("Activity is already running")]
    AlreadyRunning,

    #[display("Activity is not running")]
    NotRunning,
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Pins, resources, or the host scheduler could not be set up.
    Configuration,
    /// The caller passed a value the display cannot accept.
    InvalidArgument,
    /// The operation was called in the wrong state.
    PreconditionViolation,
}

impl Error {
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::SegmentPinCount { .. }
            | Self::DigitPinCount(_)
            | Self::CannotSetOutputState
            | Self::TaskSpawn => ErrorKind::Configuration,
            Self::EmptyText | Self::TextTooLong | Self::PositionOutOfRange(_) => {
                ErrorKind::InvalidArgument
            }
            Self::ScrollNotConfigured | Self::AlreadyRunning | Self::NotRunning => {
                ErrorKind::PreconditionViolation
            }
        }
    }
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::CannotSetOutputState
    }
}

// `embassy_executor::SpawnError` does not implement `core::error::Error`, so it is not kept as
// a source.
#[cfg(feature = "executor")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(_: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn
    }
}
