//! Timer-paced ADC threshold monitor on a NUCLEO-F072RB.
//!
//! TIM15 update events trigger ADC conversions of PA0 in hardware. Each
//! end-of-conversion interrupt drives the user LED (PA5, active-high) and
//! publishes the sample; the main loop prints every consumed sample over
//! USART2 as `ADC VALUE: <n>`.

#![no_std]
#![no_main]

use core::cell::RefCell;
use core::fmt::Write as _;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use critical_section::Mutex;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use stm32f0xx_hal::{
    pac,
    pac::interrupt,
    prelude::*,
    serial::{Serial, Tx},
};

use adc_monitor::{
    ConversionHandler, IndicatorLed, InterruptControl, InterruptId, LedPolarity, LedState,
    PlatformConfig, ResultRegister, SampleReporter, SerialPort, SharedSample,
};

/// ADC conversions per second, paced by TIM15.
const SAMPLE_RATE_HZ: u32 = 2;

/// NVIC line for the ADC_COMP interrupt on STM32F0.
const ADC_IRQ_LINE: InterruptId = InterruptId(12);

/// NUCLEO-F072RB: user LED LD2 on PA5, lit when driven high.
const BOARD: PlatformConfig = PlatformConfig::new(ADC_IRQ_LINE, LedPolarity::ActiveHigh);

static SHARED: SharedSample = SharedSample::new();

type DemoHandler = ConversionHandler<'static, AdcResultRegister, UserLed>;
static HANDLER: Mutex<RefCell<Option<DemoHandler>>> = Mutex::new(RefCell::new(None));

/// ADC result register accessor. Reading DR also clears the EOC flag.
struct AdcResultRegister {
    adc: pac::ADC,
}

impl ResultRegister for AdcResultRegister {
    fn read(&mut self) -> u16 {
        self.adc.dr.read().data().bits()
    }
}

/// User LED pin, type-erased push-pull output.
struct UserLed {
    pin: stm32f0xx_hal::gpio::gpioa::PA5<stm32f0xx_hal::gpio::Output<stm32f0xx_hal::gpio::PushPull>>,
}

impl IndicatorLed for UserLed {
    fn set_level(&mut self, level: LedState) {
        let result = match level {
            LedState::High => self.pin.set_high(),
            LedState::Low => self.pin.set_low(),
        };
        let _ = result; // infallible on this HAL
    }
}

/// Debug serial output on USART2 (ST-LINK virtual COM port).
struct DebugSerial {
    tx: Tx<pac::USART2>,
}

impl SerialPort for DebugSerial {
    fn write_line(&mut self, line: &str) {
        let _ = self.tx.write_str(line);
    }
}

/// NVIC wrapper implementing the interrupt-enable seam.
struct NvicControl;

impl InterruptControl for NvicControl {
    fn enable(&mut self, id: InterruptId) {
        match id {
            ADC_IRQ_LINE => unsafe { NVIC::unmask(pac::Interrupt::ADC_COMP) },
            _ => rprintln!("unknown interrupt line {}", id.0),
        }
    }
}

#[interrupt]
fn ADC_COMP() {
    critical_section::with(|cs| {
        if let Some(handler) = HANDLER.borrow_ref_mut(cs).as_mut() {
            handler.on_conversion();
        }
    });
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("adc-monitor stm32f0 demo starting");

    // Board/clock/pin bring-up. Peripherals::take() fails only if called
    // twice; treat it as a fatal init failure and trap via panic-halt.
    let mut dp = pac::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().sysclk(8.mhz()).freeze(&mut dp.FLASH);
    rprintln!("sysclk: {} Hz", rcc.clocks.sysclk().0);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let (analog_in, led_pin, uart_tx, uart_rx) = cortex_m::interrupt::free(|cs| {
        (
            gpioa.pa0.into_analog(cs),
            gpioa.pa5.into_push_pull_output(cs),
            gpioa.pa2.into_alternate_af1(cs),
            gpioa.pa3.into_alternate_af1(cs),
        )
    });
    let _ = analog_in; // conversion channel is selected at the register level

    // Debug serial output
    let serial = Serial::usart2(dp.USART2, (uart_tx, uart_rx), 115_200.bps(), &mut rcc);
    let (tx, _rx) = serial.split();

    // Timer/ADC trigger chain: TIM15 TRGO paces conversions of channel 0
    configure_sample_timer(&dp.TIM15);
    configure_adc(&dp.ADC);

    // Hand the interrupt-context hardware to the conversion handler
    let handler = ConversionHandler::new(
        AdcResultRegister { adc: dp.ADC },
        UserLed { pin: led_pin },
        BOARD.led_polarity,
        &SHARED,
    );
    critical_section::with(|cs| {
        HANDLER.borrow_ref_mut(cs).replace(handler);
    });

    // Only now may the conversion interrupt fire
    BOARD.enable_conversion_interrupt(&mut NvicControl);
    rprintln!("initialization complete, entering reporting loop");

    let mut reporter = SampleReporter::new(DebugSerial { tx }, &SHARED);
    reporter.run()
}

/// Configures TIM15 to emit an update TRGO at `SAMPLE_RATE_HZ`.
fn configure_sample_timer(tim: &pac::TIM15) {
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb2enr.modify(|_, w| w.tim15en().set_bit());

    // 8 MHz / 8000 = 1 kHz counter clock
    tim.psc.write(|w| w.psc().bits(7999));
    tim.arr.write(|w| w.arr().bits((1000 / SAMPLE_RATE_HZ - 1) as u16));
    // MMS = 010: update event as trigger output
    tim.cr2.modify(|_, w| unsafe { w.mms().bits(0b010) });
    tim.cr1.modify(|_, w| w.cen().set_bit());
}

/// Calibrates and enables the ADC, hardware-triggered from TIM15 TRGO
/// (EXTSEL = 100) on channel 0, with the end-of-conversion interrupt armed.
fn configure_adc(adc: &pac::ADC) {
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb2enr.modify(|_, w| w.adcen().set_bit());

    // Calibration requires a disabled ADC
    adc.cr.modify(|_, w| w.adcal().set_bit());
    while adc.cr.read().adcal().bit_is_set() {}

    adc.chselr.write(|w| unsafe { w.bits(1 << 0) });
    adc.cfgr1
        .modify(|_, w| unsafe { w.exten().bits(0b01).extsel().bits(0b100) });
    adc.ier.modify(|_, w| w.eocie().set_bit());

    adc.cr.modify(|_, w| w.aden().set_bit());
    while adc.isr.read().adrdy().bit_is_clear() {}

    // Arm the first trigger; subsequent conversions are timer-paced
    adc.cr.modify(|_, w| w.adstart().set_bit());
}
