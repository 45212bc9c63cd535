//! Vendor driver seam
//!
//! The HAL never touches peripheral registers itself. Every hardware action
//! is one call through these traits, which the Arduino-ESP32 core implements
//! on target ([`arduino::ArduinoDriver`]) and a recording double implements in
//! host tests.
//!
//! Parameters arrive already validated, so implementations do not re-check
//! ranges.

use crate::error::HalResult;
use crate::types::{DacChannel, DacLevel, GpioPin, InterruptMask, PwmChannel, PwmFrequency, TimerCallback, TimerIndex};

#[cfg(feature = "embedded")]
pub mod arduino;

/// LEDC (PWM) controller
pub trait LedcDriver {
    /// Configure a channel's frequency and duty resolution
    fn setup(&mut self, channel: PwmChannel, frequency: PwmFrequency, resolution_bits: u8);

    /// Set a channel's duty value
    fn write(&mut self, channel: PwmChannel, duty: u32);

    /// Route a channel to an output pin
    fn attach_pin(&mut self, pin: GpioPin, channel: PwmChannel);

    /// Disconnect a pin from its LEDC channel
    fn detach_pin(&mut self, pin: GpioPin);
}

/// General purpose timer groups
pub trait TimerDriver {
    /// Handle to an allocated hardware timer
    type Handle;

    /// Allocate and start the counter of a timer
    ///
    /// Returns None if the vendor could not allocate the timer.
    fn begin(&mut self, index: TimerIndex, divider: u16, count_up: bool) -> Option<Self::Handle>;

    /// Attach the interrupt service routine fired on alarm
    fn attach_interrupt(&mut self, timer: &Self::Handle, callback: TimerCallback, edge: bool);

    /// Program the alarm value in timer ticks
    fn alarm_write(&mut self, timer: &Self::Handle, ticks: u64, auto_reload: bool);

    /// Enable the alarm
    fn alarm_enable(&mut self, timer: &Self::Handle);

    /// Stop the timer and release it
    fn end(&mut self, timer: Self::Handle);
}

/// 8-bit DAC
pub trait DacDriver {
    /// Enable a DAC channel's output pad
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Driver`](crate::error::HalError::Driver) with the
    /// vendor error code.
    fn output_enable(&mut self, channel: DacChannel) -> HalResult<()>;

    /// Set a DAC channel's output level
    ///
    /// # Errors
    ///
    /// Returns [`HalError::Driver`](crate::error::HalError::Driver) with the
    /// vendor error code.
    fn output_voltage(&mut self, channel: DacChannel, level: DacLevel) -> HalResult<()>;
}

/// Processor interrupt enable register
pub trait InterruptDriver {
    /// Disable the interrupts set in `mask`, returning the previous mask
    fn ints_off(&mut self, mask: InterruptMask) -> InterruptMask;

    /// Enable the interrupts set in `mask`, returning the previous mask
    fn ints_on(&mut self, mask: InterruptMask) -> InterruptMask;
}

/// Everything [`Hal`](crate::hal::Hal) needs from the vendor
pub trait PeripheralDriver: LedcDriver + TimerDriver + DacDriver + InterruptDriver {}

impl<T> PeripheralDriver for T where T: LedcDriver + TimerDriver + DacDriver + InterruptDriver {}
