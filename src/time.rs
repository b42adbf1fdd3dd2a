//! Time management
//!
//! Tasks suspend themselves for whole ticks between iterations; that timed
//! sleep is the only scheduling point in every loop. [`Delay`] is the seam,
//! [`TickClock`] the host implementation.

/// Tick counter type
pub type Ticks = u32;

/// A timed suspension point.
///
/// `delay(0)` returns immediately without yielding.
pub trait Delay {
    fn delay(&self, ticks: Ticks);
}

impl<D: Delay + ?Sized> Delay for &D {
    #[inline]
    fn delay(&self, ticks: Ticks) {
        (**self).delay(ticks)
    }
}

#[cfg(feature = "std")]
pub use self::std_clock::TickClock;

#[cfg(feature = "std")]
mod std_clock {
    use std::time::Duration;

    use super::{Delay, Ticks};
    use crate::config::CFG_TICK_RATE_HZ;

    /// Converts tick counts to wall-clock durations and sleeps the calling
    /// thread. The tick length is configurable so tests can compress time.
    #[derive(Debug, Clone, Copy)]
    pub struct TickClock {
        tick: Duration,
    }

    impl TickClock {
        /// Clock at the configured tick rate (1 kHz: one tick = 1 ms).
        pub const fn default_rate() -> Self {
            TickClock {
                tick: Duration::from_micros(1_000_000 / CFG_TICK_RATE_HZ as u64),
            }
        }

        /// Clock with an explicit tick length.
        pub const fn with_tick(tick: Duration) -> Self {
            TickClock { tick }
        }

        /// Wall-clock duration of `ticks` ticks.
        #[inline]
        pub fn duration(&self, ticks: Ticks) -> Duration {
            self.tick * ticks
        }
    }

    impl Default for TickClock {
        fn default() -> Self {
            Self::default_rate()
        }
    }

    impl Delay for TickClock {
        fn delay(&self, ticks: Ticks) {
            if ticks > 0 {
                std::thread::sleep(self.duration(ticks));
            }
        }
    }
}
