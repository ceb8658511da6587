//! Shared state between the conversion interrupt and the reporting loop.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

/// Latest conversion result plus a ready flag, shared between interrupt
/// context and the main loop.
///
/// One instance is constructed at startup (typically as a `static`) and
/// handed by reference to both the [`ConversionHandler`](crate::ConversionHandler)
/// and the [`SampleReporter`](crate::SampleReporter). The handler is the sole
/// writer of the sample; the reporter is the sole consumer. All accesses are
/// single word-sized atomic loads and stores, so the type is usable on
/// targets without atomic read-modify-write support (e.g. thumbv6m).
///
/// The slot holds at most one unreported sample. Publishing while the
/// previous sample is still unconsumed silently overwrites it - the monitor
/// is lossy by design and applies no backpressure. Overwrites are counted
/// in [`overruns`](Self::overruns) for observability.
#[derive(Debug)]
pub struct SharedSample {
    value: AtomicU16,
    ready: AtomicBool,
    overruns: AtomicU32,
}

impl SharedSample {
    /// Creates an empty slot. `const`, so it can initialize a `static`.
    pub const fn new() -> Self {
        Self {
            value: AtomicU16::new(0),
            ready: AtomicBool::new(false),
            overruns: AtomicU32::new(0),
        }
    }

    /// Publishes a new sample. Interrupt-context side; single writer.
    ///
    /// The value is stored strictly before the ready flag is set, so a
    /// consumer that observes the flag always observes the matching value.
    /// If the previous sample was never consumed it is overwritten and the
    /// overrun counter is incremented.
    pub fn publish(&self, value: u16) {
        if self.ready.load(Ordering::Relaxed) {
            let count = self.overruns.load(Ordering::Relaxed);
            self.overruns.store(count.wrapping_add(1), Ordering::Relaxed);
        }

        self.value.store(value, Ordering::Release);
        self.ready.store(true, Ordering::Release);
    }

    /// Consumes the pending sample, if any. Main-loop side; single consumer.
    ///
    /// Returns `None` without touching any state when no sample is pending,
    /// so polling an empty slot is idempotent. Otherwise returns the sample
    /// and clears the ready flag.
    pub fn take(&self) -> Option<u16> {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }

        let value = self.value.load(Ordering::Acquire);
        self.ready.store(false, Ordering::Release);
        Some(value)
    }

    /// Returns whether an unconsumed sample is pending.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Number of samples overwritten before they were ever reported.
    ///
    /// Stays at zero as long as the reporting loop keeps up with the
    /// conversion cadence. Wraps on overflow.
    pub fn overruns(&self) -> u32 {
        self.overruns.load(Ordering::Relaxed)
    }
}

impl Default for SharedSample {
    fn default() -> Self {
        Self::new()
    }
}
