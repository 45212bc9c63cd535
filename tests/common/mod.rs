//! Recording driver shared by the host tests
//!
//! Logs every vendor call in order and keeps attached timer callbacks so a
//! test can fire them as if the alarm had elapsed.

#![allow(dead_code)]

use project8x8_hal::driver::{DacDriver, InterruptDriver, LedcDriver, TimerDriver};
use project8x8_hal::error::{HalError, HalResult};
use project8x8_hal::hal::Hal;
use project8x8_hal::types::{
    DacChannel, DacLevel, GpioPin, InterruptMask, PwmChannel, PwmFrequency, TimerCallback, TimerIndex,
};

/// One vendor call as seen by the driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Call {
    LedcSetup { channel: u8, frequency_hz: f64, resolution_bits: u8 },
    LedcWrite { channel: u8, duty: u32 },
    LedcAttachPin { pin: u8, channel: u8 },
    LedcDetachPin { pin: u8 },
    TimerBegin { index: u8, divider: u16, count_up: bool },
    TimerAttachInterrupt { timer: u8, edge: bool },
    TimerAlarmWrite { timer: u8, ticks: u64, auto_reload: bool },
    TimerAlarmEnable { timer: u8 },
    TimerEnd { timer: u8 },
    DacOutputEnable { channel: u8 },
    DacOutputVoltage { channel: u8, value: u8 },
    IntsOff { mask: u32 },
    IntsOn { mask: u32 },
}

/// Handle handed out by [`MockDriver::begin`]
#[derive(Debug, PartialEq, Eq)]
pub struct MockTimer {
    pub index: u8,
}

/// Recording stand-in for the Arduino core
#[derive(Default)]
pub struct MockDriver {
    pub calls: Vec<Call>,
    pub callbacks: [Option<TimerCallback>; 4],
    pub intenable: u32,
    /// Make `begin` report an allocation failure
    pub fail_begin: bool,
    /// Error code returned by the DAC functions
    pub dac_error: Option<i32>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded calls, leaving the log empty
    pub fn drain(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Invoke the callback attached to a timer, returns false if none
    pub fn fire(&self, index: u8) -> bool {
        match self.callbacks[usize::from(index)] {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    fn dac_result(&self) -> HalResult<()> {
        match self.dac_error {
            Some(code) => Err(HalError::Driver(code)),
            None => Ok(()),
        }
    }
}

impl LedcDriver for MockDriver {
    fn setup(&mut self, channel: PwmChannel, frequency: PwmFrequency, resolution_bits: u8) {
        self.calls.push(Call::LedcSetup {
            channel: channel.raw(),
            frequency_hz: frequency.as_hz(),
            resolution_bits,
        });
    }

    fn write(&mut self, channel: PwmChannel, duty: u32) {
        self.calls.push(Call::LedcWrite { channel: channel.raw(), duty });
    }

    fn attach_pin(&mut self, pin: GpioPin, channel: PwmChannel) {
        self.calls.push(Call::LedcAttachPin { pin: pin.raw(), channel: channel.raw() });
    }

    fn detach_pin(&mut self, pin: GpioPin) {
        self.calls.push(Call::LedcDetachPin { pin: pin.raw() });
    }
}

impl TimerDriver for MockDriver {
    type Handle = MockTimer;

    fn begin(&mut self, index: TimerIndex, divider: u16, count_up: bool) -> Option<MockTimer> {
        self.calls.push(Call::TimerBegin { index: index.raw(), divider, count_up });
        if self.fail_begin {
            None
        } else {
            Some(MockTimer { index: index.raw() })
        }
    }

    fn attach_interrupt(&mut self, timer: &MockTimer, callback: TimerCallback, edge: bool) {
        self.callbacks[usize::from(timer.index)] = Some(callback);
        self.calls.push(Call::TimerAttachInterrupt { timer: timer.index, edge });
    }

    fn alarm_write(&mut self, timer: &MockTimer, ticks: u64, auto_reload: bool) {
        self.calls.push(Call::TimerAlarmWrite { timer: timer.index, ticks, auto_reload });
    }

    fn alarm_enable(&mut self, timer: &MockTimer) {
        self.calls.push(Call::TimerAlarmEnable { timer: timer.index });
    }

    fn end(&mut self, timer: MockTimer) {
        self.callbacks[usize::from(timer.index)] = None;
        self.calls.push(Call::TimerEnd { timer: timer.index });
    }
}

impl DacDriver for MockDriver {
    fn output_enable(&mut self, channel: DacChannel) -> HalResult<()> {
        self.calls.push(Call::DacOutputEnable { channel: channel.raw() });
        self.dac_result()
    }

    fn output_voltage(&mut self, channel: DacChannel, level: DacLevel) -> HalResult<()> {
        self.calls.push(Call::DacOutputVoltage { channel: channel.raw(), value: level.raw() });
        self.dac_result()
    }
}

impl InterruptDriver for MockDriver {
    fn ints_off(&mut self, mask: InterruptMask) -> InterruptMask {
        self.calls.push(Call::IntsOff { mask: mask.bits() });
        let previous = self.intenable;
        self.intenable &= !mask.bits();
        InterruptMask::from_bits(previous)
    }

    fn ints_on(&mut self, mask: InterruptMask) -> InterruptMask {
        self.calls.push(Call::IntsOn { mask: mask.bits() });
        let previous = self.intenable;
        self.intenable |= mask.bits();
        InterruptMask::from_bits(previous)
    }
}

/// A context over a fresh recording driver
pub fn hal() -> Hal<MockDriver> {
    Hal::new(MockDriver::new())
}

/// Recorded calls so far
pub fn calls(hal: &Hal<MockDriver>) -> &[Call] {
    &hal.driver().calls
}
