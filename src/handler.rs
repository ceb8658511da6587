//! End-of-conversion handling: threshold decision, LED drive, sample publish.

use crate::hal::{IndicatorLed, ResultRegister};
use crate::shared::SharedSample;
use crate::types::{ADC_MID_OF_RANGE, LedPolarity};

/// Handles ADC end-of-conversion events.
///
/// Owns the result register accessor and the indicator LED, and publishes
/// each sample into the [`SharedSample`] slot shared with the reporting
/// loop. Platform code binds [`on_conversion`](Self::on_conversion) to the
/// ADC completion vector during initialization.
///
/// Runs in interrupt context: every operation is a register read or a
/// word-sized store, so the handler completes quickly and never blocks.
/// Conversions are paced by a hardware timer slower than handler execution,
/// so the handler never re-enters itself.
pub struct ConversionHandler<'s, R: ResultRegister, L: IndicatorLed> {
    result: R,
    led: L,
    polarity: LedPolarity,
    shared: &'s SharedSample,
}

impl<'s, R: ResultRegister, L: IndicatorLed> ConversionHandler<'s, R, L> {
    /// Creates a handler driving `led` with the given polarity.
    ///
    /// The LED is switched off immediately so its state is defined before
    /// the first conversion arrives.
    pub fn new(result: R, mut led: L, polarity: LedPolarity, shared: &'s SharedSample) -> Self {
        led.set_level(polarity.level_for(false));

        Self {
            result,
            led,
            polarity,
            shared,
        }
    }

    /// Processes one completed conversion.
    ///
    /// Reads the result register, turns the LED on iff the sample is at or
    /// above [`ADC_MID_OF_RANGE`], then publishes the sample for the
    /// reporting loop. The hardware guarantees a valid result whenever the
    /// completion event fires, so there is nothing to validate here.
    pub fn on_conversion(&mut self) {
        let sample = self.result.read();

        let on = sample >= ADC_MID_OF_RANGE;
        self.led.set_level(self.polarity.level_for(on));

        self.shared.publish(sample);
    }

    /// Returns the configured LED polarity.
    pub fn led_polarity(&self) -> LedPolarity {
        self.polarity
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }
}
