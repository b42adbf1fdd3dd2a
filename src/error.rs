//! Error types for the demo task suite
//!
//! Uses Rust's Result pattern instead of silently discarded failures.

/// Failure modes surfaced by the task primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A blocking wait elapsed without the condition being met
    Timeout,
    /// A message tag did not fit the fixed record size
    RecordOverflow,
}

/// Result type alias for task operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Timeout => f.write_str("operation timed out"),
            Error::RecordOverflow => f.write_str("message tag exceeds record size"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    #[inline]
    pub fn is_timeout(self) -> bool {
        self == Error::Timeout
    }
}
