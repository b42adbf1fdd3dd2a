//! Threaded scenarios wiring the real task bodies together
//!
//! Time is compressed by shrinking the tick length so multi-second firmware
//! behavior plays out in tens of milliseconds. Assertions stay coarse where
//! thread scheduling adds jitter; the exact boundary behavior lives in the
//! unit tests.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rtos_tasks::{
    spawn_task, tasks, Actuator, BlinkProfile, Channel, EventFlags, Level, MessageRecord,
    OutputPin, PressState, SimPin, TaskSpec, TickClock,
};

/// Output pin that records every write, shareable across task threads.
#[derive(Clone, Default)]
struct TracePin {
    writes: Arc<Mutex<Vec<Level>>>,
}

impl TracePin {
    fn new() -> Self {
        Self::default()
    }

    fn writes(&self) -> Vec<Level> {
        self.writes.lock().unwrap().clone()
    }
}

impl OutputPin for TracePin {
    fn write(&self, level: Level) {
        self.writes.lock().unwrap().push(level);
    }
}

fn leaked_pin(initial: Level) -> &'static SimPin {
    Box::leak(Box::new(SimPin::new(initial)))
}

#[test]
fn queue_pipeline_delivers_edges_and_heartbeats_in_order() {
    // 100 us tick: edge sampling every 2 ms, heartbeat every 10 ms.
    let clock = TickClock::with_tick(Duration::from_micros(100));
    let button = leaked_pin(Level::Low);
    let queue: Arc<Channel<MessageRecord>> = Arc::new(Channel::bounded(9));
    let serial = rtos_tasks::CaptureSerial::new();

    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("rising edge", 1), move || {
        tasks::rising_edge_producer(button, &q, clock)
    })
    .unwrap();
    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("falling edge", 1), move || {
        tasks::falling_edge_producer(button, &q, clock)
    })
    .unwrap();
    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("heartbeat", 1), move || {
        tasks::heartbeat_producer(&q, clock)
    })
    .unwrap();
    let q = Arc::clone(&queue);
    let sink = serial.clone();
    spawn_task(TaskSpec::new("serial consumer", 1), move || {
        tasks::serial_consumer(&q, sink, clock)
    })
    .unwrap();

    // One press-and-release, long enough for both detectors to see it.
    thread::sleep(Duration::from_millis(20));
    button.set(Level::High);
    thread::sleep(Duration::from_millis(50));
    button.set(Level::Low);
    thread::sleep(Duration::from_millis(100));

    let lines = serial.captured();
    let rising = MessageRecord::rising_edge();
    let falling = MessageRecord::falling_edge();
    let heartbeat = MessageRecord::heartbeat();

    assert_eq!(
        lines.iter().filter(|l| l.as_str() == rising.as_str()).count(),
        1,
        "one rising edge: {lines:?}"
    );
    assert_eq!(
        lines.iter().filter(|l| l.as_str() == falling.as_str()).count(),
        1,
        "one falling edge: {lines:?}"
    );
    assert!(
        lines.iter().any(|l| l.as_str() == heartbeat.as_str()),
        "heartbeats flowing: {lines:?}"
    );

    // The press preceded the release, so FIFO delivery keeps the tags in
    // that order.
    let rising_at = lines
        .iter()
        .position(|l| l.as_str() == rising.as_str())
        .unwrap();
    let falling_at = lines
        .iter()
        .position(|l| l.as_str() == falling.as_str())
        .unwrap();
    assert!(rising_at < falling_at, "FIFO order violated: {lines:?}");
}

#[test]
fn long_hold_drives_only_the_fast_actuator() {
    // 10 us tick: the 50-tick sampling period becomes 0.5 ms.
    let clock = TickClock::with_tick(Duration::from_micros(10));
    let button = leaked_pin(Level::Low);
    let state: &'static PressState = Box::leak(Box::new(PressState::new()));
    let off_pin = TracePin::new();
    let slow_pin = TracePin::new();
    let fast_pin = TracePin::new();

    spawn_task(TaskSpec::new("button tracker", 2), move || {
        tasks::button_tracker(button, state, clock)
    })
    .unwrap();
    let pin = off_pin.clone();
    spawn_task(TaskSpec::new("led off", 1), move || {
        tasks::actuator_task(Actuator::new(BlinkProfile::steady_off(), pin), state, clock)
    })
    .unwrap();
    let pin = slow_pin.clone();
    spawn_task(TaskSpec::new("led blink 400", 1), move || {
        tasks::actuator_task(Actuator::new(BlinkProfile::slow_blink(), pin), state, clock)
    })
    .unwrap();
    let pin = fast_pin.clone();
    spawn_task(TaskSpec::new("led blink 100", 1), move || {
        tasks::actuator_task(Actuator::new(BlinkProfile::fast_blink(), pin), state, clock)
    })
    .unwrap();

    // Hold far past the 80-sample threshold, then release.
    button.set(Level::High);
    thread::sleep(Duration::from_millis(300));
    button.set(Level::Low);
    thread::sleep(Duration::from_millis(100));

    assert_eq!(state.load(), rtos_tasks::PressDuration::Long);

    // The fast actuator is blinking, the slow one never matched, and the
    // steady-off actuator only ever drove low.
    assert!(
        fast_pin.writes().contains(&Level::High),
        "fast actuator should be toggling"
    );
    assert!(slow_pin.writes().is_empty(), "slow actuator should be idle");
    assert!(
        off_pin.writes().iter().all(|l| *l == Level::Low),
        "off actuator must never drive high"
    );
}

#[test]
fn toggler_coalesces_bursts_into_one_flip() {
    let clock = TickClock::with_tick(Duration::from_micros(100));
    let led = leaked_pin(Level::Low);
    let flags: &'static EventFlags = Box::leak(Box::new(EventFlags::new()));

    // Burst of releases before the toggler even starts.
    flags.set(tasks::TOGGLE_REQUEST);
    flags.set(tasks::TOGGLE_REQUEST);
    flags.set(tasks::TOGGLE_REQUEST);

    spawn_task(TaskSpec::new("led toggling", 1), move || {
        tasks::led_toggler(flags, led, clock)
    })
    .unwrap();

    thread::sleep(Duration::from_millis(50));
    // One observed wake, one flip.
    assert_eq!(led.get(), Level::High);

    // A fresh edge after the holdoff flips it back.
    flags.set(tasks::TOGGLE_REQUEST);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(led.get(), Level::Low);
}

#[test]
fn signaler_and_toggler_flip_once_per_release() {
    let clock = TickClock::with_tick(Duration::from_micros(100));
    let button = leaked_pin(Level::Low);
    let led = leaked_pin(Level::Low);
    let flags: &'static EventFlags = Box::leak(Box::new(EventFlags::new()));

    spawn_task(TaskSpec::new("led toggling", 1), move || {
        tasks::led_toggler(flags, led, clock)
    })
    .unwrap();
    spawn_task(TaskSpec::new("button tracker", 2), move || {
        tasks::edge_signaler(button, flags, clock)
    })
    .unwrap();

    thread::sleep(Duration::from_millis(20));
    assert_eq!(led.get(), Level::Low);

    // Press and release once.
    button.set(Level::High);
    thread::sleep(Duration::from_millis(30));
    button.set(Level::Low);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(led.get(), Level::High);

    // And once more.
    button.set(Level::High);
    thread::sleep(Duration::from_millis(30));
    button.set(Level::Low);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(led.get(), Level::Low);
}
