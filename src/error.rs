//! Error types returned by the driver.

use core::fmt;

/// A coordinate, page, column, cursor position or command argument lay outside its valid domain.
/// Operations which return this have not modified any state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "argument out of range")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange {}

/// Errors from operations on a `Display`. `E` is the error type of the underlying transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// See `OutOfRange`.
    OutOfRange,
    /// A bus transaction failed or timed out. Carries the transport's own status.
    Transport(E),
}

impl<E> From<OutOfRange> for Error<E> {
    fn from(_: OutOfRange) -> Self {
        Error::OutOfRange
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange => write!(f, "argument out of range"),
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}
