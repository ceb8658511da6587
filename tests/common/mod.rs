//! Shared test infrastructure for adc-monitor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use adc_monitor::{IndicatorLed, InterruptControl, InterruptId, LedState, ResultRegister, SerialPort};

// ============================================================================
// Mock Result Register
// ============================================================================

/// Mock ADC result register fed from a queue of pending conversion results
pub struct MockResultRegister {
    pending: heapless::Deque<u16, 32>,
    reads: usize,
}

impl MockResultRegister {
    pub fn new() -> Self {
        Self {
            pending: heapless::Deque::new(),
            reads: 0,
        }
    }

    /// Queues the result of the next conversion
    pub fn push_result(&mut self, value: u16) {
        self.pending
            .push_back(value)
            .expect("mock result queue full");
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ResultRegister for MockResultRegister {
    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.pending
            .pop_front()
            .expect("read with no conversion pending")
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED pin that records every level change for testing
pub struct MockLed {
    current_level: Option<LedState>,
    level_history: heapless::Vec<LedState, 32>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_level: None,
            level_history: heapless::Vec::new(),
        }
    }

    pub fn current_level(&self) -> Option<LedState> {
        self.current_level
    }

    pub fn level_history(&self) -> &[LedState] {
        &self.level_history
    }
}

impl IndicatorLed for MockLed {
    fn set_level(&mut self, level: LedState) {
        self.current_level = Some(level);
        let _ = self.level_history.push(level);
    }
}

// ============================================================================
// Mock Serial Port
// ============================================================================

/// Mock serial port that captures every line written to it
pub struct MockSerial {
    lines: Vec<String>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl SerialPort for MockSerial {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

// ============================================================================
// Mock Interrupt Controller
// ============================================================================

/// Mock NVIC recording which interrupt lines were unmasked
pub struct MockNvic {
    enabled: heapless::Vec<InterruptId, 8>,
}

impl MockNvic {
    pub fn new() -> Self {
        Self {
            enabled: heapless::Vec::new(),
        }
    }

    pub fn enabled(&self) -> &[InterruptId] {
        &self.enabled
    }
}

impl InterruptControl for MockNvic {
    fn enable(&mut self, id: InterruptId) {
        let _ = self.enabled.push(id);
    }
}
