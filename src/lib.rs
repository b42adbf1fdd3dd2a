//! Cooperating demo tasks over a threaded runtime
//!
//! Host-runnable rework of a set of small RTOS firmware demos:
//! - Button hold-duration classification driving category-specific LED cadences
//! - Edge-event producers feeding a bounded FIFO queue and a serial consumer
//! - Event-bit signaling between a button sampler and an LED toggler
//!
//! The core state machines are `no_std`; the `std` feature (default) adds the
//! thread runtime, blocking channel/event primitives and serial sinks.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Modules ============

pub mod log;

pub mod actuator;
pub mod button;
pub mod config;
pub mod error;
pub mod gpio;
pub mod message;
pub mod serial;
pub mod tasks;
pub mod time;

#[cfg(feature = "std")]
pub mod runtime;
#[cfg(feature = "std")]
pub mod sync;

// ============ Re-exports ============

pub use actuator::{Actuator, BlinkProfile, Blinker};
pub use button::{FallingEdgeDetector, HoldTracker, PressDuration, PressState, RisingEdgeDetector};
pub use error::{Error, Result};
pub use gpio::{InputPin, Level, OutputPin, SimPin};
pub use message::MessageRecord;
pub use serial::SerialTx;
pub use time::{Delay, Ticks};

#[cfg(feature = "std")]
pub use runtime::{spawn_task, run_forever, TaskSpec};
#[cfg(feature = "std")]
pub use serial::{CaptureSerial, StdoutSerial};
#[cfg(feature = "std")]
pub use sync::{Channel, EventFlags, Flags, SendOutcome};
#[cfg(feature = "std")]
pub use time::TickClock;
