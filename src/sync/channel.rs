//! Bounded FIFO channel
//!
//! Records are moved in by value and handed out in strict enqueue order.
//! Producers block while the channel is full, consumers while it is empty,
//! each up to an explicit deadline.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::time_left;
use crate::error::{Error, Result};

/// Outcome of a bounded-wait enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendOutcome {
    /// The record was copied into the channel
    Delivered,
    /// No space freed up before the deadline; the record was dropped
    TimedOut,
}

impl SendOutcome {
    #[inline]
    pub fn is_delivered(self) -> bool {
        self == SendOutcome::Delivered
    }
}

/// Multi-producer, multi-consumer bounded queue.
pub struct Channel<T> {
    queue: Mutex<VecDeque<T>>,
    capacity: usize,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T> Channel<T> {
    /// Channel holding at most `capacity` in-flight records.
    pub fn bounded(capacity: usize) -> Self {
        assert!(capacity > 0, "channel capacity must be nonzero");
        Channel {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    // A poisoned lock only means a task panicked mid-push/pop of a plain
    // VecDeque, which cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Enqueue at the back, blocking while full.
    ///
    /// Returns [`SendOutcome::TimedOut`] (and drops `item`) if no slot frees
    /// up within `timeout`.
    pub fn send(&self, item: T, timeout: Duration) -> SendOutcome {
        let deadline = Instant::now() + timeout;
        let mut queue = self.lock();
        loop {
            if queue.len() < self.capacity {
                queue.push_back(item);
                drop(queue);
                self.not_empty.notify_one();
                return SendOutcome::Delivered;
            }
            let Some(remaining) = time_left(deadline) else {
                return SendOutcome::TimedOut;
            };
            let (guard, _) = self
                .not_full
                .wait_timeout(queue, remaining)
                .unwrap_or_else(|e| e.into_inner());
            queue = guard;
        }
    }

    /// Dequeue from the front, blocking while empty.
    pub fn recv(&self, timeout: Duration) -> Result<T> {
        let deadline = Instant::now() + timeout;
        let mut queue = self.lock();
        loop {
            if let Some(item) = queue.pop_front() {
                drop(queue);
                self.not_full.notify_one();
                return Ok(item);
            }
            let Some(remaining) = time_left(deadline) else {
                return Err(Error::Timeout);
            };
            let (guard, _) = self
                .not_empty
                .wait_timeout(queue, remaining)
                .unwrap_or_else(|e| e.into_inner());
            queue = guard;
        }
    }

    /// Records currently in flight.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
