//! Button sampling and hold-duration classification
//!
//! The tracker polls the raw pin level once per sampling period and counts
//! consecutive asserted samples. On the release edge the accumulated count is
//! mapped to a [`PressDuration`] and the counter resets. Reads are
//! deliberately un-debounced; a bounce shows up as a separate short press.

use portable_atomic::{AtomicU8, Ordering};

use crate::config::{CFG_MEDIUM_MAX_SAMPLES, CFG_SHORT_MAX_SAMPLES};
use crate::gpio::Level;

/// Classification of a completed press, by hold duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PressDuration {
    /// Held for less than 2 seconds
    Short = 0,
    /// Held for 2 to 4 seconds
    Medium = 1,
    /// Held for more than 4 seconds
    Long = 2,
}

impl PressDuration {
    /// Classify a completed hold of `held` sampling ticks.
    ///
    /// Boundary-exact: `held < 40` is short, `40 <= held < 80` is medium,
    /// `held >= 80` is long (2 s and 4 s at the 50 ms sampling period).
    pub fn classify(held: u32) -> Self {
        if held < CFG_SHORT_MAX_SAMPLES {
            PressDuration::Short
        } else if held < CFG_MEDIUM_MAX_SAMPLES {
            PressDuration::Medium
        } else {
            PressDuration::Long
        }
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => PressDuration::Medium,
            2 => PressDuration::Long,
            _ => PressDuration::Short,
        }
    }
}

/// Counts consecutive asserted samples and classifies on release.
///
/// Owned exclusively by the sampler task; one `sample` call per sampling
/// period.
#[derive(Debug, Default)]
pub struct HoldTracker {
    held: u32,
}

impl HoldTracker {
    pub const fn new() -> Self {
        HoldTracker { held: 0 }
    }

    /// Feed one raw sample. Returns the classification exactly once, at the
    /// release edge; `None` while the button is held or idle.
    pub fn sample(&mut self, level: Level) -> Option<PressDuration> {
        match level {
            Level::High => {
                self.held += 1;
                None
            }
            Level::Low if self.held != 0 => {
                let duration = PressDuration::classify(self.held);
                self.held = 0;
                Some(duration)
            }
            Level::Low => None,
        }
    }

    /// Consecutive asserted samples since the last release.
    #[inline]
    pub fn held_ticks(&self) -> u32 {
        self.held
    }
}

/// Shared classification cell.
///
/// The sampler stores, every actuator loads. A plain atomic byte: readers may
/// lag the latest store by one poll but never observe a torn value.
#[derive(Debug)]
pub struct PressState(AtomicU8);

impl PressState {
    /// Starts out as [`PressDuration::Short`], so every actuator is idle
    /// until the first press completes.
    pub const fn new() -> Self {
        PressState(AtomicU8::new(PressDuration::Short as u8))
    }

    #[inline]
    pub fn store(&self, duration: PressDuration) {
        self.0.store(duration as u8, Ordering::Release);
    }

    #[inline]
    pub fn load(&self) -> PressDuration {
        PressDuration::from_raw(self.0.load(Ordering::Acquire))
    }
}

impl Default for PressState {
    fn default() -> Self {
        Self::new()
    }
}

/// Emits once per low-to-high transition.
///
/// Polled, not interrupt-driven: a transition shorter than the sampling
/// period is missed.
#[derive(Debug, Default)]
pub struct RisingEdgeDetector {
    seen_high: bool,
}

impl RisingEdgeDetector {
    pub const fn new() -> Self {
        RisingEdgeDetector { seen_high: false }
    }

    pub fn sample(&mut self, level: Level) -> bool {
        match level {
            Level::High if !self.seen_high => {
                self.seen_high = true;
                true
            }
            Level::High => false,
            Level::Low => {
                self.seen_high = false;
                false
            }
        }
    }
}

/// Emits once per high-to-low transition.
#[derive(Debug, Default)]
pub struct FallingEdgeDetector {
    held: u32,
}

impl FallingEdgeDetector {
    pub const fn new() -> Self {
        FallingEdgeDetector { held: 0 }
    }

    pub fn sample(&mut self, level: Level) -> bool {
        match level {
            Level::High => {
                self.held += 1;
                false
            }
            Level::Low if self.held != 0 => {
                self.held = 0;
                true
            }
            Level::Low => false,
        }
    }
}
