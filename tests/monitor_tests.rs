//! End-to-end tests wiring ConversionHandler and SampleReporter through a
//! shared sample slot, the way a firmware image assembles them.

mod common;
use common::*;

use adc_monitor::{
    ConversionHandler, InterruptId, LedPolarity, LedState, PlatformConfig, SampleReporter,
    SharedSample,
};

#[test]
fn conversion_flows_from_register_to_serial() {
    let shared = SharedSample::new();

    let mut register = MockResultRegister::new();
    register.push_result(3000);
    let mut handler = ConversionHandler::new(
        register,
        MockLed::new(),
        PlatformConfig::XMC4000_RELAX_KIT.led_polarity,
        &shared,
    );
    let mut reporter = SampleReporter::new(MockSerial::new(), &shared);

    // Nothing to report before the first conversion
    assert_eq!(reporter.poll(), None);

    handler.on_conversion();
    assert_eq!(reporter.poll(), Some(3000));

    let serial = reporter.into_serial();
    assert_eq!(serial.lines(), ["ADC VALUE: 3000\r\n"]);
    assert_eq!(handler.led().current_level(), Some(LedState::High));
}

#[test]
fn interleaved_conversions_and_polls() {
    let shared = SharedSample::new();

    let mut register = MockResultRegister::new();
    for v in [500, 1500, 2500, 3500] {
        register.push_result(v);
    }
    let mut handler =
        ConversionHandler::new(register, MockLed::new(), LedPolarity::ActiveHigh, &shared);
    let mut reporter = SampleReporter::new(MockSerial::new(), &shared);

    handler.on_conversion();
    assert_eq!(reporter.poll(), Some(500));
    assert_eq!(handler.led().current_level(), Some(LedState::Low));

    handler.on_conversion();
    assert_eq!(reporter.poll(), Some(1500));

    // Loop falls behind for two conversions
    handler.on_conversion();
    handler.on_conversion();
    assert_eq!(reporter.poll(), Some(3500));
    assert_eq!(reporter.poll(), None);

    assert_eq!(shared.overruns(), 1);
    assert_eq!(handler.led().current_level(), Some(LedState::High));

    let serial = reporter.into_serial();
    assert_eq!(
        serial.lines(),
        [
            "ADC VALUE: 500\r\n",
            "ADC VALUE: 1500\r\n",
            "ADC VALUE: 3500\r\n",
        ]
    );
}

#[test]
fn repeated_empty_polls_leave_led_and_serial_untouched() {
    let shared = SharedSample::new();

    let mut register = MockResultRegister::new();
    register.push_result(4000);
    let mut handler =
        ConversionHandler::new(register, MockLed::new(), LedPolarity::ActiveHigh, &shared);
    let mut reporter = SampleReporter::new(MockSerial::new(), &shared);

    handler.on_conversion();
    reporter.poll();

    let levels_before = handler.led().level_history().len();
    for _ in 0..100 {
        assert_eq!(reporter.poll(), None);
    }
    assert_eq!(handler.led().level_history().len(), levels_before);

    let serial = reporter.into_serial();
    assert_eq!(serial.lines().len(), 1);
}

#[test]
fn platform_config_enables_the_right_interrupt_line() {
    let mut nvic = MockNvic::new();

    PlatformConfig::XMC1400_BOOT_KIT.enable_conversion_interrupt(&mut nvic);
    assert_eq!(nvic.enabled(), [InterruptId(19)]);

    let mut nvic = MockNvic::new();
    PlatformConfig::XMC4000_RELAX_KIT.enable_conversion_interrupt(&mut nvic);
    assert_eq!(nvic.enabled(), [InterruptId(18)]);
}

#[test]
fn custom_platform_config() {
    let config = PlatformConfig::new(InterruptId(42), LedPolarity::ActiveLow);
    let mut nvic = MockNvic::new();
    config.enable_conversion_interrupt(&mut nvic);

    assert_eq!(nvic.enabled(), [InterruptId(42)]);
    assert_eq!(config.led_polarity, LedPolarity::ActiveLow);
}
