use thiserror::Error;

/// Errors returned by collection operations
///
/// Out-of-range positions and ordering-precondition failures are reported
/// as values rather than aborting, so callers can recover. Allocation
/// exhaustion is the one condition left to the runtime's abort.
#[derive(Debug, Error)]
pub enum Error {
    /// Position is outside the collection
    #[error("position {pos} out of range for a collection of {len}")]
    OutOfRange { pos: usize, len: usize },

    /// Sorted insert requested while the collection is not sorted
    #[error("collection is not sorted by year; call sort_by_year first")]
    NotSorted,

    /// The sorted flag byte in a stream header was neither 0 nor 1
    #[error("invalid sorted flag byte {0:#04x} in stream header")]
    InvalidFlag(u8),

    /// Underlying stream failure while reading or writing
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
