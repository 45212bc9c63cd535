//! Error types
//!
//! Every typed operation on [`Hal`](crate::hal::Hal) returns a [`HalResult`].
//! The raw operations behind the C exports log and discard these errors.

use core::fmt;

use crate::types::TimerIndex;

/// HAL operation result
pub type HalResult<T> = Result<T, HalError>;

/// Reasons an operation did not reach the hardware
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HalError {
    /// PWM channel outside 0-15
    InvalidPwmChannel(u8),
    /// PWM frequency outside 1-312500 Hz (or NaN)
    InvalidPwmFrequency(f64),
    /// GPIO number outside 0-39
    InvalidPin(u8),
    /// Timer index outside 0-3
    InvalidTimer(u8),
    /// DAC channel other than 1 or 2
    InvalidDacChannel(u8),
    /// Null interrupt callback
    MissingCallback,
    /// Timer used before `setup_timer` (or after `stop_timer`)
    TimerNotConfigured(TimerIndex),
    /// Vendor driver could not allocate the timer
    TimerAllocationFailed(TimerIndex),
    /// Vendor driver returned an `esp_err_t` other than `ESP_OK`
    Driver(i32),
}

impl HalError {
    /// True for errors caused by an out-of-range parameter
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidPwmChannel(_)
                | Self::InvalidPwmFrequency(_)
                | Self::InvalidPin(_)
                | Self::InvalidTimer(_)
                | Self::InvalidDacChannel(_)
                | Self::MissingCallback
        )
    }
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPwmChannel(ch) => write!(f, "invalid PWM channel {ch}"),
            Self::InvalidPwmFrequency(hz) => write!(f, "invalid PWM frequency {hz} Hz"),
            Self::InvalidPin(pin) => write!(f, "invalid GPIO {pin}"),
            Self::InvalidTimer(index) => write!(f, "invalid timer index {index}"),
            Self::InvalidDacChannel(ch) => write!(f, "invalid DAC channel {ch}"),
            Self::MissingCallback => f.write_str("missing timer callback"),
            Self::TimerNotConfigured(index) => write!(f, "timer {} not configured", index.raw()),
            Self::TimerAllocationFailed(index) => {
                write!(f, "timer {} could not be allocated", index.raw())
            }
            Self::Driver(code) => write!(f, "driver error {code}"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HalError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::InvalidPwmChannel(ch) => defmt::write!(f, "invalid PWM channel {}", ch),
            Self::InvalidPwmFrequency(hz) => defmt::write!(f, "invalid PWM frequency {} Hz", hz),
            Self::InvalidPin(pin) => defmt::write!(f, "invalid GPIO {}", pin),
            Self::InvalidTimer(index) => defmt::write!(f, "invalid timer index {}", index),
            Self::InvalidDacChannel(ch) => defmt::write!(f, "invalid DAC channel {}", ch),
            Self::MissingCallback => defmt::write!(f, "missing timer callback"),
            Self::TimerNotConfigured(index) => {
                defmt::write!(f, "timer {} not configured", index.raw());
            }
            Self::TimerAllocationFailed(index) => {
                defmt::write!(f, "timer {} could not be allocated", index.raw());
            }
            Self::Driver(code) => defmt::write!(f, "driver error {}", code),
        }
    }
}
