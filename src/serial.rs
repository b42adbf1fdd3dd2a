//! Serial transmit sink
//!
//! On hardware the consumer task would forward queue records to a UART.
//! [`SerialTx`] is the seam; the host implementations write to stdout or
//! capture into memory for assertions.

use crate::message::MessageRecord;

/// Somewhere for the consumer task to forward records.
pub trait SerialTx {
    fn write_record(&mut self, record: &MessageRecord);
}

impl<S: SerialTx + ?Sized> SerialTx for &mut S {
    fn write_record(&mut self, record: &MessageRecord) {
        (**self).write_record(record)
    }
}

#[cfg(feature = "std")]
pub use self::std_sinks::{CaptureSerial, StdoutSerial};

#[cfg(feature = "std")]
mod std_sinks {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::SerialTx;
    use crate::message::MessageRecord;

    /// Writes records to stdout. The baud rate is recorded for parity with a
    /// real UART init; a pipe has no line speed.
    #[derive(Debug)]
    pub struct StdoutSerial {
        baud: u32,
    }

    impl StdoutSerial {
        pub fn init(baud: u32) -> Self {
            crate::debug!("serial configured at {} baud", baud);
            StdoutSerial { baud }
        }

        #[inline]
        pub fn baud(&self) -> u32 {
            self.baud
        }
    }

    impl SerialTx for StdoutSerial {
        fn write_record(&mut self, record: &MessageRecord) {
            let mut out = std::io::stdout().lock();
            // Serial output is best-effort, like a UART write.
            let _ = out.write_all(record.as_str().as_bytes());
            let _ = out.flush();
        }
    }

    /// In-memory sink shared between a consumer task and a test observer.
    #[derive(Debug, Clone, Default)]
    pub struct CaptureSerial {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl CaptureSerial {
        pub fn new() -> Self {
            Self::default()
        }

        /// Everything written so far, in arrival order.
        pub fn captured(&self) -> Vec<String> {
            self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }

        pub fn len(&self) -> usize {
            self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl SerialTx for CaptureSerial {
        fn write_record(&mut self, record: &MessageRecord) {
            self.lines
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(record.as_str().to_owned());
        }
    }
}
