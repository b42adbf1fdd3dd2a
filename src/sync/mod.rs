//! Synchronization primitives
//!
//! Host-side stand-ins for the kernel objects the demos lean on: a bounded
//! FIFO channel and an event-flag group. Both make timeouts explicit result
//! values instead of silent no-ops.

use std::time::{Duration, Instant};

mod channel;
mod event;

pub use channel::{Channel, SendOutcome};
pub use event::{EventFlags, Flags};

/// Time left until `deadline`, `None` once it has passed.
fn time_left(deadline: Instant) -> Option<Duration> {
    let now = Instant::now();
    if now >= deadline {
        None
    } else {
        Some(deadline - now)
    }
}
