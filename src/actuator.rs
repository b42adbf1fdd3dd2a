//! Output actuators
//!
//! Three LED tasks, one per press category, would differ only in their
//! cadence constants. [`Actuator`] folds them into one body parameterized by
//! a [`BlinkProfile`]; three instances reproduce the trio.

use crate::button::PressDuration;
use crate::config::{CFG_ACTUATOR_POLL, CFG_BLINK_FAST_HALF, CFG_BLINK_SLOW_HALF};
use crate::gpio::{Level, OutputPin};
use crate::time::{Delay, Ticks};

/// Waveform an actuator produces while its trigger category is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkProfile {
    /// Category this actuator responds to
    pub trigger: PressDuration,
    /// Square-wave half-period; `None` holds the pin low instead
    pub half_period: Option<Ticks>,
    /// Re-poll period while the trigger category is not active
    pub poll_period: Ticks,
}

impl BlinkProfile {
    /// Short press: steady off.
    pub const fn steady_off() -> Self {
        BlinkProfile {
            trigger: PressDuration::Short,
            half_period: None,
            poll_period: CFG_ACTUATOR_POLL,
        }
    }

    /// Medium press: 400 ms on / 400 ms off.
    pub const fn slow_blink() -> Self {
        BlinkProfile {
            trigger: PressDuration::Medium,
            half_period: Some(CFG_BLINK_SLOW_HALF),
            poll_period: CFG_ACTUATOR_POLL,
        }
    }

    /// Long press: 100 ms on / 100 ms off.
    pub const fn fast_blink() -> Self {
        BlinkProfile {
            trigger: PressDuration::Long,
            half_period: Some(CFG_BLINK_FAST_HALF),
            poll_period: CFG_ACTUATOR_POLL,
        }
    }
}

/// One LED task body: polls the shared category and drives its pin.
#[derive(Debug)]
pub struct Actuator<P: OutputPin> {
    profile: BlinkProfile,
    pin: P,
}

impl<P: OutputPin> Actuator<P> {
    pub const fn new(profile: BlinkProfile, pin: P) -> Self {
        Actuator { profile, pin }
    }

    #[inline]
    pub fn profile(&self) -> BlinkProfile {
        self.profile
    }

    /// One wake cycle.
    ///
    /// Matched with a half-period: drive high, sleep a half-period, drive
    /// low, sleep again. Matched steady-off: drive low and sleep one poll
    /// period. Unmatched: sleep one poll period without touching the pin, so
    /// a category switch is picked up within one poll.
    pub fn service<D: Delay>(&mut self, current: PressDuration, delay: &D) {
        if current != self.profile.trigger {
            delay.delay(self.profile.poll_period);
            return;
        }
        match self.profile.half_period {
            Some(half) => {
                self.pin.write(Level::High);
                delay.delay(half);
                self.pin.write(Level::Low);
                delay.delay(half);
            }
            None => {
                self.pin.write(Level::Low);
                delay.delay(self.profile.poll_period);
            }
        }
    }
}

/// Free-running square wave, the standalone blink demo.
#[derive(Debug)]
pub struct Blinker<P: OutputPin> {
    pin: P,
    half_period: Ticks,
}

impl<P: OutputPin> Blinker<P> {
    pub const fn new(pin: P, half_period: Ticks) -> Self {
        Blinker { pin, half_period }
    }

    /// One full on/off cycle.
    pub fn cycle<D: Delay>(&mut self, delay: &D) {
        self.pin.write(Level::High);
        delay.delay(self.half_period);
        self.pin.write(Level::Low);
        delay.delay(self.half_period);
    }
}
