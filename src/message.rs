//! Fixed-size message records
//!
//! Records travel through the serial queue by value, 15 bytes each. Tags keep
//! their trailing padding and CRLF so the serial output lines up column for
//! column.

use heapless::String;

use crate::config::CFG_RECORD_SIZE;
use crate::error::{Error, Result};

const RISING_TAG: &str = "Rising Edge \r\n";
const FALLING_TAG: &str = "Falling Edge\r\n";
const HEARTBEAT_TAG: &str = "Hello       \r\n";

/// One queued serial record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord(String<CFG_RECORD_SIZE>);

impl MessageRecord {
    /// Build a record from an arbitrary tag. Tags longer than
    /// [`CFG_RECORD_SIZE`] bytes are rejected rather than truncated.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let mut buf = String::new();
        buf.push_str(tag).map_err(|_| Error::RecordOverflow)?;
        Ok(MessageRecord(buf))
    }

    /// "Rising Edge" event tag.
    pub fn rising_edge() -> Self {
        Self::of(RISING_TAG)
    }

    /// "Falling Edge" event tag.
    pub fn falling_edge() -> Self {
        Self::of(FALLING_TAG)
    }

    /// Periodic heartbeat tag.
    pub fn heartbeat() -> Self {
        Self::of(HEARTBEAT_TAG)
    }

    // The built-in tags are all 14 bytes; the error arm is unreachable.
    fn of(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(MessageRecord(String::new()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MessageRecord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str());
    }
}
