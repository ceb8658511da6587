//! Per-target platform configuration.
//!
//! The supported board families differ only in which interrupt line carries
//! the ADC group-0 result-0 completion event and in how the user LED is
//! wired. Both differences are captured in one [`PlatformConfig`] value
//! selected at startup, instead of conditional compilation scattered
//! through the core.

use crate::hal::InterruptControl;
use crate::types::LedPolarity;

/// Identifier of an interrupt line at the processor's interrupt controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptId(pub u16);

/// Everything that varies between supported board families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlatformConfig {
    /// Interrupt line carrying the ADC end-of-conversion event.
    pub interrupt_id: InterruptId,
    /// Wiring of the user LED on this board.
    pub led_polarity: LedPolarity,
}

impl PlatformConfig {
    /// XMC1400 Boot Kit: conversion events arrive on shared interrupt
    /// node 19, user LED is active-low.
    pub const XMC1400_BOOT_KIT: Self = Self::new(InterruptId(19), LedPolarity::ActiveLow);

    /// XMC4000-family Relax Kit: conversion events arrive on the dedicated
    /// VADC group-0 result-0 node, user LED is active-high.
    pub const XMC4000_RELAX_KIT: Self = Self::new(InterruptId(18), LedPolarity::ActiveHigh);

    /// Creates a configuration for a custom target.
    pub const fn new(interrupt_id: InterruptId, led_polarity: LedPolarity) -> Self {
        Self {
            interrupt_id,
            led_polarity,
        }
    }

    /// Unmasks the end-of-conversion interrupt line.
    ///
    /// Final initialization step: only after this call can the conversion
    /// handler ever run. The caller must have bound the handler to the
    /// vector and configured the timer/ADC trigger chain beforehand.
    pub fn enable_conversion_interrupt(&self, nvic: &mut impl InterruptControl) {
        nvic.enable(self.interrupt_id);
    }
}
