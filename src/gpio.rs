//! Pin abstractions
//!
//! On target hardware these demos would poke a memory-mapped GPIO block. Here
//! the seam is a pair of traits so task bodies run unchanged against real pins
//! on a target port or against [`SimPin`] on a host.

use portable_atomic::{AtomicBool, Ordering};

/// Digital pin level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    #[inline]
    pub fn toggle(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// A readable input pin.
///
/// Implementors are internally synchronized; reads may happen from any task.
pub trait InputPin {
    fn read(&self) -> Level;
}

/// A writable output pin.
pub trait OutputPin {
    fn write(&self, level: Level);
}

/// Simulated pin backed by an atomic level.
///
/// Serves as both ends of the wire: a stimulus task drives it through
/// [`OutputPin`] (or [`SimPin::set`]) and a sampler observes it through
/// [`InputPin`].
#[derive(Debug)]
pub struct SimPin {
    high: AtomicBool,
}

impl SimPin {
    pub const fn new(initial: Level) -> Self {
        SimPin {
            high: AtomicBool::new(matches!(initial, Level::High)),
        }
    }

    #[inline]
    pub fn set(&self, level: Level) {
        self.high.store(level.is_high(), Ordering::Release);
    }

    #[inline]
    pub fn get(&self) -> Level {
        if self.high.load(Ordering::Acquire) {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl InputPin for SimPin {
    #[inline]
    fn read(&self) -> Level {
        self.get()
    }
}

impl OutputPin for SimPin {
    #[inline]
    fn write(&self, level: Level) {
        self.set(level);
    }
}

impl<P: InputPin + ?Sized> InputPin for &P {
    #[inline]
    fn read(&self) -> Level {
        (**self).read()
    }
}

impl<P: OutputPin + ?Sized> OutputPin for &P {
    #[inline]
    fn write(&self, level: Level) {
        (**self).write(level)
    }
}
