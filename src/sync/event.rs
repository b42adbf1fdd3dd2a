//! Event flag group
//!
//! A shared bit mask with FreeRTOS event-group semantics: any task sets bits,
//! a waiter blocks until its mask is satisfied and may clear the bits it
//! consumed on the way out. Bits carry no count, so sets arriving before the
//! waiter wakes coalesce into a single observed wake.

use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::time_left;
use crate::error::{Error, Result};

/// Event bit mask type
pub type Flags = u32;

/// Shared group of event bits.
#[derive(Debug, Default)]
pub struct EventFlags {
    bits: Mutex<Flags>,
    changed: Condvar,
}

impl EventFlags {
    pub const fn new() -> Self {
        EventFlags {
            bits: Mutex::new(0),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Flags> {
        self.bits.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set every bit in `mask` and wake all waiters.
    ///
    /// Setting an already-set bit is a no-op beyond the wakeup; bits do not
    /// accumulate a count.
    pub fn set(&self, mask: Flags) {
        let mut bits = self.lock();
        *bits |= mask;
        drop(bits);
        self.changed.notify_all();
    }

    /// Bits currently set, without blocking or clearing.
    pub fn get(&self) -> Flags {
        *self.lock()
    }

    /// Block until `mask` is satisfied or `timeout` elapses.
    ///
    /// With `wait_all` every bit of `mask` must be set at once; otherwise any
    /// one suffices. On success returns the full group value observed at the
    /// wake, after clearing the satisfied `mask` bits when `clear_on_exit` is
    /// set. A timeout leaves the group untouched.
    pub fn wait(
        &self,
        mask: Flags,
        clear_on_exit: bool,
        wait_all: bool,
        timeout: Duration,
    ) -> Result<Flags> {
        let deadline = Instant::now() + timeout;
        let mut bits = self.lock();
        loop {
            let satisfied = if wait_all {
                *bits & mask == mask
            } else {
                *bits & mask != 0
            };
            if satisfied {
                let observed = *bits;
                if clear_on_exit {
                    *bits &= !mask;
                }
                return Ok(observed);
            }
            let Some(remaining) = time_left(deadline) else {
                return Err(Error::Timeout);
            };
            let (guard, _) = self
                .changed
                .wait_timeout(bits, remaining)
                .unwrap_or_else(|e| e.into_inner());
            bits = guard;
        }
    }
}
