//! Compile-time configuration for the demo task suite
//!
//! These constants control the sampling cadences, classification thresholds
//! and queue sizing of the demo tasks. All periods are in ticks; one tick is
//! one millisecond at the default tick rate.

use crate::time::Ticks;

/// System tick rate in Hz (one tick = 1 ms)
pub const CFG_TICK_RATE_HZ: u32 = 1000;

/// Button sampling period for the hold tracker
pub const CFG_SAMPLE_PERIOD: Ticks = 50;

/// Hold counts below this classify as a short press (< 2 s at 50 ms/sample)
pub const CFG_SHORT_MAX_SAMPLES: u32 = 40;

/// Hold counts below this (and at least `CFG_SHORT_MAX_SAMPLES`) classify as
/// a medium press (2-4 s at 50 ms/sample)
pub const CFG_MEDIUM_MAX_SAMPLES: u32 = 80;

/// Actuator re-poll period while its category is not active
pub const CFG_ACTUATOR_POLL: Ticks = 100;

/// Half-period of the slow blink (medium press)
pub const CFG_BLINK_SLOW_HALF: Ticks = 400;

/// Half-period of the fast blink (long press)
pub const CFG_BLINK_FAST_HALF: Ticks = 100;

/// Edge-detector sampling period (messaging variant)
pub const CFG_EDGE_SAMPLE_PERIOD: Ticks = 20;

/// Heartbeat record period (messaging variant)
pub const CFG_HEARTBEAT_PERIOD: Ticks = 100;

/// Consumer sleep between serial forwards
pub const CFG_CONSUMER_PAUSE: Ticks = 10;

/// In-flight record capacity of the serial queue
pub const CFG_QUEUE_DEPTH: usize = 9;

/// Fixed size of one message record, in bytes
pub const CFG_RECORD_SIZE: usize = 15;

/// How long a producer may block waiting for queue space
pub const CFG_SEND_TIMEOUT: Ticks = 5_000;

/// How long the toggler waits for the event bit before re-arming
pub const CFG_EVENT_WAIT_TIMEOUT: Ticks = 10_000;

/// Toggler holdoff after flipping its output
pub const CFG_TOGGLE_HOLDOFF: Ticks = 50;

/// Serial port baud rate
pub const CFG_BAUD_RATE: u32 = 115_200;

/// Default task stack size in bytes
pub const CFG_TASK_STACK: usize = 64 * 1024;
