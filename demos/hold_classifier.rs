//! Button hold-duration classifier driving one LED at category-specific
//! cadences.
//!
//! A stimulus task stands in for the human finger, cycling through a short,
//! a medium and a long press. The tracker classifies each press on release
//! and the three actuator tasks fight over the single shared LED.

use std::time::Duration;

use rtos_tasks::{
    run_forever, spawn_task, tasks, Actuator, BlinkProfile, Level, PressState, SimPin, TaskSpec,
    TickClock,
};

static BUTTON: SimPin = SimPin::new(Level::Low);
static LED: SimPin = SimPin::new(Level::Low);
static PRESS: PressState = PressState::new();

fn press_for(millis: u64) {
    BUTTON.set(Level::High);
    std::thread::sleep(Duration::from_millis(millis));
    BUTTON.set(Level::Low);
    std::thread::sleep(Duration::from_millis(2_000));
}

fn main() {
    let clock = TickClock::default_rate();

    spawn_task(TaskSpec::new("button tracker", 2), move || {
        tasks::button_tracker(&BUTTON, &PRESS, clock)
    })
    .expect("tracker task failed");

    spawn_task(TaskSpec::new("led off", 1), move || {
        tasks::actuator_task(Actuator::new(BlinkProfile::steady_off(), &LED), &PRESS, clock)
    })
    .expect("led off task failed");

    spawn_task(TaskSpec::new("led blink 400", 1), move || {
        tasks::actuator_task(Actuator::new(BlinkProfile::slow_blink(), &LED), &PRESS, clock)
    })
    .expect("slow blink task failed");

    spawn_task(TaskSpec::new("led blink 100", 1), move || {
        tasks::actuator_task(Actuator::new(BlinkProfile::fast_blink(), &LED), &PRESS, clock)
    })
    .expect("fast blink task failed");

    // Stimulus: 1 s, 3 s, 5 s holds, forever.
    spawn_task(TaskSpec::new("stimulus", 1), || loop {
        press_for(1_000);
        press_for(3_000);
        press_for(5_000);
    })
    .expect("stimulus task failed");

    // Report LED edges so the cadence is visible.
    spawn_task(TaskSpec::new("panel", 1), || {
        let mut last = LED.get();
        loop {
            let now = LED.get();
            if now != last {
                println!("LED -> {:?} ({:?})", now, PRESS.load());
                last = now;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    })
    .expect("panel task failed");

    run_forever();
}
