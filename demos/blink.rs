//! Three LEDs blinking at independent cadences, one task per LED.

use std::time::Duration;

use rtos_tasks::{run_forever, spawn_task, tasks, Blinker, Level, SimPin, TaskSpec, TickClock};

static LED1: SimPin = SimPin::new(Level::Low);
static LED2: SimPin = SimPin::new(Level::Low);
static LED3: SimPin = SimPin::new(Level::Low);

fn main() {
    let clock = TickClock::default_rate();

    spawn_task(TaskSpec::new("led1 blink", 1), move || {
        tasks::blinker_task(Blinker::new(&LED1, 1000), clock)
    })
    .expect("led1 task failed");

    spawn_task(TaskSpec::new("led2 blink", 1), move || {
        tasks::blinker_task(Blinker::new(&LED2, 500), clock)
    })
    .expect("led2 task failed");

    spawn_task(TaskSpec::new("led3 blink", 1), move || {
        tasks::blinker_task(Blinker::new(&LED3, 100), clock)
    })
    .expect("led3 task failed");

    // Render the simulated pins so the cadences are visible on a host.
    spawn_task(TaskSpec::new("panel", 1), || loop {
        println!(
            "LED1 {:?}  LED2 {:?}  LED3 {:?}",
            LED1.get(),
            LED2.get(),
            LED3.get()
        );
        std::thread::sleep(Duration::from_millis(250));
    })
    .expect("panel task failed");

    run_forever();
}
