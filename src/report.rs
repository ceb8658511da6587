//! Polling loop that reports consumed samples over the debug serial port.

use core::fmt::Write;

use crate::hal::SerialPort;
use crate::shared::SharedSample;

/// `"ADC VALUE: 65535\r\n"` is 18 bytes; round up for slack.
const LINE_CAPACITY: usize = 24;

/// Emits each consumed sample as one line on the debug serial output.
///
/// Runs on the main execution context after initialization. Each
/// [`poll`](Self::poll) consumes at most one pending sample from the
/// [`SharedSample`] slot and writes it as `ADC VALUE: <n>\r\n`;
/// [`run`](Self::run) busy-waits on `poll` forever.
pub struct SampleReporter<'s, S: SerialPort> {
    serial: S,
    shared: &'s SharedSample,
}

impl<'s, S: SerialPort> SampleReporter<'s, S> {
    /// Creates a reporter writing to `serial`.
    pub fn new(serial: S, shared: &'s SharedSample) -> Self {
        Self { serial, shared }
    }

    /// Performs one loop iteration.
    ///
    /// If a sample is pending, consumes it, writes the report line and
    /// returns the value. Otherwise does nothing and returns `None` -
    /// polling an empty slot has no observable effect.
    pub fn poll(&mut self) -> Option<u16> {
        let sample = self.shared.take()?;

        let mut line: heapless::String<LINE_CAPACITY> = heapless::String::new();
        // Cannot overflow: the largest u16 line is 18 bytes.
        let _ = write!(line, "ADC VALUE: {}\r\n", sample);
        self.serial.write_line(&line);

        Some(sample)
    }

    /// Runs the reporting loop forever.
    ///
    /// Busy-waits between samples with a spin-loop hint; there is no
    /// termination condition - the loop runs until power-off or reset.
    pub fn run(&mut self) -> ! {
        loop {
            if self.poll().is_none() {
                core::hint::spin_loop();
            }
        }
    }

    /// Releases the serial port.
    pub fn into_serial(self) -> S {
        self.serial
    }
}
