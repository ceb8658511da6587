//! Core types and constants for threshold monitoring.

/// Midpoint of the 12-bit conversion range.
///
/// The indicator LED turns on when a sample is at or above this value and
/// off when below it. Fixed at build time.
pub const ADC_MID_OF_RANGE: u16 = 2047;

/// Largest value a 12-bit conversion can produce.
pub const ADC_FULL_SCALE_12BIT: u16 = 4095;

/// Resolved output level for an indicator pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// Pin driven to logic high.
    High,
    /// Pin driven to logic low.
    Low,
}

/// Electrical polarity of the indicator LED.
///
/// Board families wire the user LED differently: on some the LED lights
/// when the pin is driven high, on others when driven low. The polarity is
/// part of [`PlatformConfig`](crate::platform::PlatformConfig) so the
/// on/off decision stays portable across targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPolarity {
    /// LED lights when the pin is high.
    ActiveHigh,
    /// LED lights when the pin is low.
    ActiveLow,
}

impl LedPolarity {
    /// Maps a logical on/off decision to the pin level for this polarity.
    #[inline]
    pub fn level_for(self, on: bool) -> LedState {
        match (self, on) {
            (LedPolarity::ActiveHigh, true) | (LedPolarity::ActiveLow, false) => LedState::High,
            (LedPolarity::ActiveHigh, false) | (LedPolarity::ActiveLow, true) => LedState::Low,
        }
    }
}
