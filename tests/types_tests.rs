//! Validated Type Tests
//!
//! Run with: cargo test --no-default-features --features std --test types_tests

use project8x8_hal::types::*;

// =============================================================================
// PwmChannel / GpioPin
// =============================================================================

#[test]
fn every_pwm_channel_in_range_is_accepted() {
    for raw in 0..=15 {
        assert_eq!(PwmChannel::new(raw).map(PwmChannel::raw), Some(raw));
    }
    for raw in 16..=u8::MAX {
        assert!(PwmChannel::new(raw).is_none(), "channel {raw} accepted");
    }
}

#[test]
fn pwm_channel_speed_mode() {
    assert!(PwmChannel::new(7).unwrap().is_high_speed());
    assert!(!PwmChannel::new(8).unwrap().is_high_speed());
}

#[test]
fn gpio_range() {
    assert!(GpioPin::new(0).is_some());
    assert!(GpioPin::new(39).is_some());
    assert!(GpioPin::new(40).is_none());
}

#[test]
fn gpio_input_only_pins() {
    assert!(!GpioPin::new(33).unwrap().is_input_only());
    assert!(GpioPin::new(34).unwrap().is_input_only());
    assert!(GpioPin::new(39).unwrap().is_input_only());
}

#[test]
fn display_names() {
    assert_eq!(PwmChannel::new(3).unwrap().to_string(), "LEDC3");
    assert_eq!(GpioPin::new(25).unwrap().to_string(), "GPIO25");
    assert_eq!(TimerIndex::new(2).unwrap().to_string(), "TG1T0");
    assert_eq!(DacChannel::Two.to_string(), "DAC2");
}

// =============================================================================
// PwmFrequency
// =============================================================================

#[test]
fn frequency_range_is_inclusive() {
    assert_eq!(PwmFrequency::from_hz(1.0).map(PwmFrequency::as_hz), Some(1.0));
    assert_eq!(PwmFrequency::from_hz(312_500.0).map(PwmFrequency::as_hz), Some(312_500.0));
    assert!(PwmFrequency::from_hz(0.5).is_none());
    assert!(PwmFrequency::from_hz(312_501.0).is_none());
    assert!(PwmFrequency::from_hz(-1.0).is_none());
}

#[test]
fn counting_frequency_is_256x() {
    let freq = PwmFrequency::from_hz(1_000.0).unwrap();
    assert_eq!(freq.counting_hz(), 256_000.0);
}

// =============================================================================
// DutyCycle
// =============================================================================

#[test]
fn duty_percent_conversion() {
    assert_eq!(DutyCycle::from_percent(0), DutyCycle::ZERO);
    assert_eq!(DutyCycle::from_percent(50), DutyCycle::HALF);
    assert_eq!(DutyCycle::from_percent(100), DutyCycle::FULL);
    assert_eq!(DutyCycle::from_percent(200), DutyCycle::FULL);
}

#[test]
fn duty_as_percent_saturates() {
    assert_eq!(DutyCycle::FULL.as_percent(), 100);
    assert_eq!(DutyCycle::from_raw(256).as_percent(), 100);
    assert_eq!(DutyCycle::from_raw(256).raw(), 256);
}

// =============================================================================
// TimerIndex
// =============================================================================

#[test]
fn timer_index_range() {
    assert_eq!(TimerIndex::all().count(), 4);
    assert!(TimerIndex::new(4).is_none());
    assert_eq!(TimerIndex::ADC, TimerIndex::new(3).unwrap());
}

#[test]
fn timer_slots_are_distinct() {
    let slots: Vec<usize> = TimerIndex::all().map(TimerIndex::slot).collect();
    assert_eq!(slots, vec![0, 1, 2, 3]);
}

// =============================================================================
// DAC
// =============================================================================

#[test]
fn dac_channel_from_raw() {
    assert_eq!(DacChannel::new(1), Some(DacChannel::One));
    assert_eq!(DacChannel::new(2), Some(DacChannel::Two));
    assert_eq!(DacChannel::new(0), None);
    assert_eq!(DacChannel::new(3), None);
    assert_eq!(DacChannel::Two.raw(), 2);
}

#[test]
fn dac_level_voltage() {
    assert_eq!(DacLevel::ZERO.millivolts(), 0);
    assert_eq!(DacLevel::FULL.millivolts(), 3_300);
    assert_eq!(DacLevel::from_millivolts(3_300), DacLevel::FULL);
    assert_eq!(DacLevel::from_millivolts(5_000), DacLevel::FULL);
    assert_eq!(DacLevel::from_millivolts(0), DacLevel::ZERO);
}

// =============================================================================
// InterruptMask
// =============================================================================

#[test]
fn interrupt_masks() {
    assert_eq!(InterruptMask::BLOCK.bits(), 0xFFFF_FFBF);
    assert_eq!(InterruptMask::ALL.bits(), u32::MAX);
    assert!(InterruptMask::from_bits(0b1000).contains(3));
}
