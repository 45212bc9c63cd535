//! Validated parameter types
//!
//! Each peripheral parameter has a newtype whose constructor enforces the
//! hardware range. Once a value exists it is known to be in range, so the
//! driver seam never sees an out-of-range channel, pin or timer.

use core::fmt;

use crate::config::{
    pins, DAC_VREF_MV, INTERRUPT_BLOCK_MASK, INTERRUPT_UNBLOCK_MASK, MAX_GPIO, PWM_CHANNEL_COUNT,
    PWM_MAX_FREQUENCY_HZ, PWM_MIN_FREQUENCY_HZ, PWM_RESOLUTION_BITS, TIMER_COUNT,
};

/// Interrupt service routine attached to a hardware timer
pub type TimerCallback = extern "C" fn();

/// LEDC channel number (0-15)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PwmChannel(u8);

impl PwmChannel {
    /// Highest valid channel number
    pub const MAX: u8 = PWM_CHANNEL_COUNT - 1;

    /// Create a channel, returns None if out of range
    #[must_use]
    pub const fn new(channel: u8) -> Option<Self> {
        if channel <= Self::MAX {
            Some(Self(channel))
        } else {
            None
        }
    }

    /// Get the channel number
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Channels 0-7 are driven by the high-speed LEDC block
    #[must_use]
    pub const fn is_high_speed(self) -> bool {
        self.0 < 8
    }
}

impl fmt::Display for PwmChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LEDC{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PwmChannel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LEDC{}", self.0);
    }
}

/// GPIO number (0-39)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpioPin(u8);

impl GpioPin {
    /// Highest valid GPIO number
    pub const MAX: u8 = MAX_GPIO;

    /// Create a pin, returns None if out of range
    #[must_use]
    pub const fn new(pin: u8) -> Option<Self> {
        if pin <= Self::MAX {
            Some(Self(pin))
        } else {
            None
        }
    }

    /// Get the GPIO number
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// GPIO34-39 have no output driver
    #[must_use]
    pub const fn is_input_only(self) -> bool {
        self.0 >= 34
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GpioPin {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GPIO{}", self.0);
    }
}

/// PWM frequency in Hertz with validation
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PwmFrequency(f64);

impl PwmFrequency {
    /// Minimum supported frequency
    pub const MIN_HZ: f64 = PWM_MIN_FREQUENCY_HZ;

    /// Maximum supported frequency at 8-bit resolution
    pub const MAX_HZ: f64 = PWM_MAX_FREQUENCY_HZ;

    /// Create a frequency, returns None if out of range or NaN
    #[must_use]
    pub fn from_hz(hz: f64) -> Option<Self> {
        if (Self::MIN_HZ..=Self::MAX_HZ).contains(&hz) {
            Some(Self(hz))
        } else {
            None
        }
    }

    /// Get the frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> f64 {
        self.0
    }

    /// Counter clock needed to produce this frequency (`freq * 256`)
    #[must_use]
    pub fn counting_hz(self) -> f64 {
        self.0 * f64::from(1u32 << PWM_RESOLUTION_BITS)
    }
}

impl fmt::Display for PwmFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PwmFrequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Hz", self.0);
    }
}

/// PWM duty value at 8-bit resolution
///
/// The raw value is forwarded to the LEDC unchanged. 255 is nominally 100%;
/// the LEDC also accepts 256, which holds the output high for the whole period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DutyCycle(u16);

impl DutyCycle {
    /// 0% duty cycle
    pub const ZERO: Self = Self(0);

    /// 100% duty cycle
    pub const FULL: Self = Self(255);

    /// 50% duty cycle
    pub const HALF: Self = Self(128);

    /// Create from raw value
    #[must_use]
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// Create from percentage (0-100)
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        let value = (u32::from(percent.min(100)) * 255 + 50) / 100;
        Self(value as u16)
    }

    /// Get raw value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get as percentage (saturates at 100)
    #[must_use]
    pub fn as_percent(self) -> u8 {
        ((u32::from(self.0.min(255)) * 100) / 255) as u8
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DutyCycle {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}%", self.as_percent());
    }
}

/// Hardware timer index (0-3)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerIndex(u8);

impl TimerIndex {
    /// Highest valid timer index
    pub const MAX: u8 = TIMER_COUNT as u8 - 1;

    /// Timer reserved by convention for ADC sampling
    pub const ADC: Self = Self(crate::config::timers::ADC_SAMPLE);

    /// Create an index, returns None if out of range
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Position in the timer registry
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    /// Timer group (0 or 1)
    #[must_use]
    pub const fn group(self) -> u8 {
        self.0 / 2
    }

    /// Timer number within its group (0 or 1)
    #[must_use]
    pub const fn number_in_group(self) -> u8 {
        self.0 % 2
    }

    /// True for the ADC sampling timer
    #[must_use]
    pub const fn is_reserved_for_adc(self) -> bool {
        self.0 == Self::ADC.0
    }

    /// Iterate over all timer indices in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl fmt::Display for TimerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TG{}T{}", self.group(), self.number_in_group())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimerIndex {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TG{}T{}", self.group(), self.number_in_group());
    }
}

/// DAC channel
///
/// Discriminants match the vendor `dac_channel_t` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DacChannel {
    /// DAC channel 1 (GPIO25)
    One = 1,
    /// DAC channel 2 (GPIO26)
    Two = 2,
}

impl DacChannel {
    /// Create from raw channel number, returns None unless 1 or 2
    #[must_use]
    pub const fn new(channel: u8) -> Option<Self> {
        match channel {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// Get the raw channel number
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// GPIO carrying this channel's output
    #[must_use]
    pub const fn pin(self) -> u8 {
        match self {
            Self::One => pins::DAC1_PIN,
            Self::Two => pins::DAC2_PIN,
        }
    }
}

impl fmt::Display for DacChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DAC{}", self.raw())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DacChannel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::One => defmt::write!(f, "DAC1"),
            Self::Two => defmt::write!(f, "DAC2"),
        }
    }
}

/// DAC output level (0 = 0V, 255 = 3.3V)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DacLevel(u8);

impl DacLevel {
    /// 0V
    pub const ZERO: Self = Self(0);

    /// Full scale (3.3V)
    pub const FULL: Self = Self(255);

    /// Create from raw 8-bit value
    #[must_use]
    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// Create from millivolts (clamped to the reference, rounded to nearest)
    #[must_use]
    pub const fn from_millivolts(mv: u32) -> Self {
        let mv = if mv > DAC_VREF_MV { DAC_VREF_MV } else { mv };
        Self(((mv * 255 + DAC_VREF_MV / 2) / DAC_VREF_MV) as u8)
    }

    /// Get the raw 8-bit value
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Nominal output voltage in millivolts
    #[must_use]
    pub const fn millivolts(self) -> u32 {
        self.0 as u32 * DAC_VREF_MV / 255
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DacLevel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}mV", self.millivolts());
    }
}

/// Xtensa `INTENABLE` mask
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptMask(u32);

impl InterruptMask {
    /// Every CPU interrupt except the reserved one
    pub const BLOCK: Self = Self(INTERRUPT_BLOCK_MASK);

    /// Every CPU interrupt
    pub const ALL: Self = Self(INTERRUPT_UNBLOCK_MASK);

    /// Create from raw bits
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Get raw bits
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether a CPU interrupt is covered by this mask
    #[must_use]
    pub const fn contains(self, interrupt: u32) -> bool {
        interrupt < 32 && self.0 & (1 << interrupt) != 0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterruptMask {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:#x}", self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pwm_channel_bounds() {
        assert_eq!(PwmChannel::new(0).map(PwmChannel::raw), Some(0));
        assert_eq!(PwmChannel::new(15).map(PwmChannel::raw), Some(15));
        assert!(PwmChannel::new(16).is_none());
        assert!(PwmChannel::new(255).is_none());
    }

    #[test]
    fn pwm_frequency_rejects_nan() {
        assert!(PwmFrequency::from_hz(f64::NAN).is_none());
        assert!(PwmFrequency::from_hz(f64::INFINITY).is_none());
    }

    #[test]
    fn max_frequency_saturates_apb_clock() {
        let max = PwmFrequency::from_hz(PwmFrequency::MAX_HZ).unwrap();
        assert_eq!(max.counting_hz(), f64::from(crate::config::APB_CLOCK_HZ));
    }

    #[test]
    fn timer_index_groups() {
        let t0 = TimerIndex::new(0).unwrap();
        let t3 = TimerIndex::new(3).unwrap();
        assert_eq!((t0.group(), t0.number_in_group()), (0, 0));
        assert_eq!((t3.group(), t3.number_in_group()), (1, 1));
        assert!(t3.is_reserved_for_adc());
        assert!(!t0.is_reserved_for_adc());
    }

    #[test]
    fn dac_channel_discriminants() {
        assert_eq!(DacChannel::One as u8, 1);
        assert_eq!(DacChannel::Two as u8, 2);
        assert!(DacChannel::new(0).is_none());
    }

    #[test]
    fn block_mask_spares_reserved_interrupt() {
        assert!(!InterruptMask::BLOCK.contains(6));
        assert!(InterruptMask::BLOCK.contains(5));
        assert!(InterruptMask::ALL.contains(6));
        assert!(!InterruptMask::ALL.contains(32));
    }
}
