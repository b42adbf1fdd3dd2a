//! Task bodies
//!
//! One function per task of the demo programs. Every body is an infinite
//! loop whose only scheduling points are a timed sleep or a blocking
//! queue/event wait, preserving the poll-then-yield structure.

use crate::actuator::{Actuator, Blinker};
use crate::button::{HoldTracker, PressState};
use crate::config::CFG_SAMPLE_PERIOD;
use crate::gpio::{InputPin, OutputPin};
use crate::time::Delay;

/// Samples the button every 50 ticks and publishes the classification of
/// each completed press.
pub fn button_tracker<P: InputPin, D: Delay>(pin: P, state: &PressState, delay: D) -> ! {
    crate::info!("button tracker started");
    let mut tracker = HoldTracker::new();
    loop {
        if let Some(duration) = tracker.sample(pin.read()) {
            crate::info!("press classified as {:?}", duration);
            state.store(duration);
        }
        delay.delay(CFG_SAMPLE_PERIOD);
    }
}

/// Polls the shared press state and drives one actuator.
pub fn actuator_task<P: OutputPin, D: Delay>(
    mut actuator: Actuator<P>,
    state: &PressState,
    delay: D,
) -> ! {
    crate::info!("actuator for {:?} started", actuator.profile().trigger);
    loop {
        actuator.service(state.load(), &delay);
    }
}

/// Free-running blink at a fixed cadence.
pub fn blinker_task<P: OutputPin, D: Delay>(mut blinker: Blinker<P>, delay: D) -> ! {
    crate::info!("blinker started");
    loop {
        blinker.cycle(&delay);
    }
}

#[cfg(feature = "std")]
pub use self::std_tasks::*;

#[cfg(feature = "std")]
mod std_tasks {
    use crate::button::{FallingEdgeDetector, RisingEdgeDetector};
    use crate::config::{
        CFG_CONSUMER_PAUSE, CFG_EDGE_SAMPLE_PERIOD, CFG_EVENT_WAIT_TIMEOUT, CFG_HEARTBEAT_PERIOD,
        CFG_SEND_TIMEOUT, CFG_TOGGLE_HOLDOFF,
    };
    use crate::gpio::{InputPin, Level, OutputPin};
    use crate::message::MessageRecord;
    use crate::serial::SerialTx;
    use crate::sync::{Channel, EventFlags, Flags, SendOutcome};
    use crate::time::{Delay, TickClock};

    /// Event bit the falling-edge signaler sets for the toggler.
    pub const TOGGLE_REQUEST: Flags = 1 << 0;

    fn enqueue(queue: &Channel<MessageRecord>, record: MessageRecord, clock: &TickClock) {
        let tag = record.as_str().trim_end().to_owned();
        match queue.send(record, clock.duration(CFG_SEND_TIMEOUT)) {
            SendOutcome::Delivered => crate::debug!("queued \"{}\"", tag.as_str()),
            // No retry after the generous timeout; the drop only shows up in
            // the log.
            SendOutcome::TimedOut => crate::warn!("dropped \"{}\": queue full", tag.as_str()),
        }
    }

    /// Enqueues a "Rising Edge" record once per low-to-high transition,
    /// sampling every 20 ticks.
    pub fn rising_edge_producer<P: InputPin>(
        pin: P,
        queue: &Channel<MessageRecord>,
        clock: TickClock,
    ) -> ! {
        crate::info!("rising edge producer started");
        let mut detector = RisingEdgeDetector::new();
        loop {
            if detector.sample(pin.read()) {
                enqueue(queue, MessageRecord::rising_edge(), &clock);
            }
            clock.delay(CFG_EDGE_SAMPLE_PERIOD);
        }
    }

    /// Enqueues a "Falling Edge" record once per high-to-low transition.
    pub fn falling_edge_producer<P: InputPin>(
        pin: P,
        queue: &Channel<MessageRecord>,
        clock: TickClock,
    ) -> ! {
        crate::info!("falling edge producer started");
        let mut detector = FallingEdgeDetector::new();
        loop {
            if detector.sample(pin.read()) {
                enqueue(queue, MessageRecord::falling_edge(), &clock);
            }
            clock.delay(CFG_EDGE_SAMPLE_PERIOD);
        }
    }

    /// Enqueues the heartbeat record every 100 ticks.
    pub fn heartbeat_producer(queue: &Channel<MessageRecord>, clock: TickClock) -> ! {
        crate::info!("heartbeat producer started");
        loop {
            enqueue(queue, MessageRecord::heartbeat(), &clock);
            clock.delay(CFG_HEARTBEAT_PERIOD);
        }
    }

    /// Drains the queue in FIFO order and forwards each record to the serial
    /// sink.
    pub fn serial_consumer<S: SerialTx>(
        queue: &Channel<MessageRecord>,
        mut serial: S,
        clock: TickClock,
    ) -> ! {
        crate::info!("serial consumer started");
        loop {
            if let Ok(record) = queue.recv(clock.duration(CFG_SEND_TIMEOUT)) {
                serial.write_record(&record);
            }
            clock.delay(CFG_CONSUMER_PAUSE);
        }
    }

    /// Sets [`TOGGLE_REQUEST`] once per falling edge of the button, sampling
    /// every 50 ticks.
    pub fn edge_signaler<P: InputPin, D: Delay>(pin: P, flags: &EventFlags, delay: D) -> ! {
        crate::info!("edge signaler started");
        let mut detector = FallingEdgeDetector::new();
        loop {
            if detector.sample(pin.read()) {
                flags.set(TOGGLE_REQUEST);
            }
            delay.delay(crate::config::CFG_SAMPLE_PERIOD);
        }
    }

    /// Waits for [`TOGGLE_REQUEST`], clears it and flips the output pin.
    ///
    /// Edges arriving while this task is still asleep coalesce into one
    /// toggle; the bit has no count. A wait timeout re-arms without touching
    /// the pin.
    pub fn led_toggler<P: OutputPin>(flags: &EventFlags, pin: P, clock: TickClock) -> ! {
        crate::info!("led toggler started");
        let mut level = Level::Low;
        pin.write(level);
        loop {
            if flags
                .wait(TOGGLE_REQUEST, true, false, clock.duration(CFG_EVENT_WAIT_TIMEOUT))
                .is_ok()
            {
                level = level.toggle();
                pin.write(level);
                crate::debug!("led toggled {:?}", level);
            }
            clock.delay(CFG_TOGGLE_HOLDOFF);
        }
    }
}
