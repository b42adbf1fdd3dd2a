//! Threaded task runtime
//!
//! Maps the kernel's create-task call onto named OS threads. Each demo main
//! spawns its tasks and then parks forever, mirroring a scheduler start that
//! never returns.

use std::io;
use std::thread::{self, JoinHandle};

use crate::config::CFG_TASK_STACK;

/// Create-task parameters.
///
/// Priority is carried for parity with the kernel API but is advisory here;
/// the host thread scheduler does not honor it.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    pub name: &'static str,
    pub stack_size: usize,
    pub priority: u8,
}

impl TaskSpec {
    pub const fn new(name: &'static str, priority: u8) -> Self {
        TaskSpec {
            name,
            stack_size: CFG_TASK_STACK,
            priority,
        }
    }

    pub const fn with_stack(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }
}

/// Spawn a task thread. The entry function is expected to loop forever.
pub fn spawn_task<F>(spec: TaskSpec, entry: F) -> io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    crate::debug!("spawning task \"{}\" (prio {})", spec.name, spec.priority);
    thread::Builder::new()
        .name(spec.name.to_owned())
        .stack_size(spec.stack_size)
        .spawn(entry)
}

/// Hand control over to the spawned tasks, never returning.
pub fn run_forever() -> ! {
    crate::info!("all tasks running");
    loop {
        thread::park();
    }
}
