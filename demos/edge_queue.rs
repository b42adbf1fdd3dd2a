//! Edge events and heartbeats funneled through a bounded queue to a serial
//! consumer.
//!
//! Two detector tasks watch the same simulated button and tag its rising and
//! falling edges; a third produces a periodic heartbeat. A single consumer
//! drains the queue in FIFO order onto stdout.

use std::sync::Arc;
use std::time::Duration;

use rtos_tasks::config::{CFG_BAUD_RATE, CFG_QUEUE_DEPTH};
use rtos_tasks::{
    run_forever, spawn_task, tasks, Channel, Level, MessageRecord, SimPin, StdoutSerial, TaskSpec,
    TickClock,
};

static BUTTON: SimPin = SimPin::new(Level::Low);

fn main() {
    let clock = TickClock::default_rate();
    let queue: Arc<Channel<MessageRecord>> = Arc::new(Channel::bounded(CFG_QUEUE_DEPTH));

    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("rising edge", 1), move || {
        tasks::rising_edge_producer(&BUTTON, &q, clock)
    })
    .expect("rising edge task failed");

    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("falling edge", 1), move || {
        tasks::falling_edge_producer(&BUTTON, &q, clock)
    })
    .expect("falling edge task failed");

    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("heartbeat", 1), move || {
        tasks::heartbeat_producer(&q, clock)
    })
    .expect("heartbeat task failed");

    let q = Arc::clone(&queue);
    spawn_task(TaskSpec::new("serial consumer", 1), move || {
        tasks::serial_consumer(&q, StdoutSerial::init(CFG_BAUD_RATE), clock)
    })
    .expect("consumer task failed");

    // Stimulus: press-and-release so both edge producers get work.
    spawn_task(TaskSpec::new("stimulus", 1), || loop {
        BUTTON.set(Level::High);
        std::thread::sleep(Duration::from_millis(400));
        BUTTON.set(Level::Low);
        std::thread::sleep(Duration::from_millis(600));
    })
    .expect("stimulus task failed");

    run_forever();
}
