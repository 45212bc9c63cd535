//! Board configuration and hardware constants
//!
//! This module defines compile-time constants for the ESP32 on the project8x8
//! board. Clock rates, peripheral counts, parameter ranges and pin
//! assignments are centralized here.

/// APB clock feeding the LEDC and timer group peripherals (80 MHz)
pub const APB_CLOCK_HZ: u32 = 80_000_000;

/// Number of LEDC PWM channels (8 high-speed + 8 low-speed)
pub const PWM_CHANNEL_COUNT: u8 = 16;

/// Duty resolution used for every PWM channel
pub const PWM_RESOLUTION_BITS: u8 = 8;

/// Lowest accepted PWM frequency in Hz
pub const PWM_MIN_FREQUENCY_HZ: f64 = 1.0;

/// Highest accepted PWM frequency in Hz
///
/// Each period is split into 2^[`PWM_RESOLUTION_BITS`] counts, so the
/// counter runs at `freq * 256`, which must not exceed the APB clock.
pub const PWM_MAX_FREQUENCY_HZ: f64 = 312_500.0;

/// Highest GPIO number on the ESP32
pub const MAX_GPIO: u8 = 39;

/// Number of general purpose hardware timers (2 groups x 2 timers)
pub const TIMER_COUNT: usize = 4;

/// Default timer prescaler giving a 1 MHz count rate from the APB clock
pub const TIMER_DIVIDER: u16 = 80;

/// Timer count rate at the default divider (1 MHz, one tick per microsecond)
pub const TIMER_TICK_HZ: u32 = APB_CLOCK_HZ / TIMER_DIVIDER as u32;

/// DAC reference voltage in millivolts (full scale at 255)
pub const DAC_VREF_MV: u32 = 3300;

/// CPU interrupt left enabled while interrupts are blocked
pub const RESERVED_CPU_INTERRUPT: u32 = 6;

/// Mask passed to the interrupt-disable primitive by `block_interrupts`
pub const INTERRUPT_BLOCK_MASK: u32 = !(1 << RESERVED_CPU_INTERRUPT);

/// Mask passed to the interrupt-enable primitive by `unblock_interrupts`
pub const INTERRUPT_UNBLOCK_MASK: u32 = 0xFFFF_FFFF;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Push button (BOOT strap, active low)
    pub const PUSH_BUTTON_PIN: u8 = 0;

    /// On-board status LED
    pub const LED_PIN: u8 = 2;

    /// DAC channel 1 output
    pub const DAC1_PIN: u8 = 25;

    /// DAC channel 2 output
    pub const DAC2_PIN: u8 = 26;
}

/// Timer assignments
pub mod timers {
    //! Hardware timer assignments

    /// Timer reserved for ADC sampling
    pub const ADC_SAMPLE: u8 = 3;
}
