//! LED toggled through an event bit.
//!
//! The signaler samples the button and sets the toggle bit on each release;
//! the toggler blocks on the bit, clears it and flips the LED. Releases that
//! pile up while the toggler sleeps coalesce into a single flip.

use std::time::Duration;

use rtos_tasks::{
    run_forever, spawn_task, tasks, EventFlags, Level, SimPin, TaskSpec, TickClock,
};

static BUTTON: SimPin = SimPin::new(Level::Low);
static LED: SimPin = SimPin::new(Level::Low);
static TOGGLE_EVENT: EventFlags = EventFlags::new();

fn main() {
    let clock = TickClock::default_rate();

    spawn_task(TaskSpec::new("led toggling", 1), move || {
        tasks::led_toggler(&TOGGLE_EVENT, &LED, clock)
    })
    .expect("toggler task failed");

    spawn_task(TaskSpec::new("button tracker", 2), move || {
        tasks::edge_signaler(&BUTTON, &TOGGLE_EVENT, clock)
    })
    .expect("signaler task failed");

    spawn_task(TaskSpec::new("stimulus", 1), || loop {
        BUTTON.set(Level::High);
        std::thread::sleep(Duration::from_millis(300));
        BUTTON.set(Level::Low);
        std::thread::sleep(Duration::from_millis(1_200));
    })
    .expect("stimulus task failed");

    spawn_task(TaskSpec::new("panel", 1), || {
        let mut last = LED.get();
        loop {
            let now = LED.get();
            if now != last {
                println!("LED -> {:?}", now);
                last = now;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    })
    .expect("panel task failed");

    run_forever();
}
