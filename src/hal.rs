//! Hardware abstraction traits for platform-agnostic monitoring.
//!
//! The monitor never touches registers directly. Each seam between the core
//! and the board is a small trait implemented by platform code: the ADC
//! result register, the indicator LED pin, the debug serial port, and the
//! interrupt controller.

use crate::platform::InterruptId;
use crate::types::LedState;

/// Trait for reading a completed conversion out of an ADC result register.
///
/// Implement this for your ADC peripheral. The group and result-register
/// index are fixed by the implementation; the monitor always reads whatever
/// register the implementation was constructed for. The conversion is
/// guaranteed complete when the monitor calls [`read`](Self::read), so no
/// status polling is required.
pub trait ResultRegister {
    /// Returns the most recent conversion result, right-aligned.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn read(&mut self) -> u16;
}

/// Trait for abstracting the indicator LED pin.
///
/// Implement this for your GPIO output. The monitor drives raw pin levels;
/// the on/off mapping for the board's wiring is applied beforehand via
/// [`LedPolarity`](crate::types::LedPolarity), so implementations should
/// not invert anything themselves.
pub trait IndicatorLed {
    /// Drives the pin to the given logic level.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_level(&mut self, level: LedState);
}

/// Trait for abstracting the debug serial output.
///
/// Implement this for your UART, RTT channel, or other debug sink. The
/// monitor hands over one complete report line at a time, terminator
/// included, so implementations never need to buffer across calls.
pub trait SerialPort {
    /// Writes one complete line to the debug output.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write_line(&mut self, line: &str);
}

/// Trait for abstracting the processor's interrupt controller.
///
/// Implement this for your NVIC (or equivalent) so the end-of-conversion
/// interrupt line can be unmasked through
/// [`PlatformConfig::enable_conversion_interrupt`](crate::platform::PlatformConfig::enable_conversion_interrupt)
/// during initialization.
pub trait InterruptControl {
    /// Unmasks the given interrupt line.
    fn enable(&mut self, id: InterruptId);
}
