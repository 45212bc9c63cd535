//! Arduino-ESP32 core bindings
//!
//! Forwards every driver call to the Arduino core (`esp32-hal-ledc`,
//! `esp32-hal-timer`) and the ESP-IDF legacy DAC driver. The processor
//! interrupt mask goes through IDF's `xt_ints_on`/`xt_ints_off` so the
//! runtime's shadow of `INTENABLE` stays in sync.
//!
//! Also provides the `critical-section` implementation for the sketch, built
//! on the FreeRTOS port spinlock.

#![allow(unsafe_code)]

use core::cell::UnsafeCell;
use core::ptr::NonNull;

use crate::driver::{DacDriver, InterruptDriver, LedcDriver, TimerDriver};
use crate::error::{HalError, HalResult};
use crate::types::{DacChannel, DacLevel, GpioPin, InterruptMask, PwmChannel, PwmFrequency, TimerCallback, TimerIndex};

/// Raw vendor symbols
#[allow(non_camel_case_types, non_snake_case)]
mod sys {
    use crate::types::TimerCallback;

    /// `esp_err_t`
    pub type esp_err_t = i32;

    /// `ESP_OK`
    pub const ESP_OK: esp_err_t = 0;

    /// `dac_channel_t`
    pub type dac_channel_t = u32;

    /// Opaque `hw_timer_t`
    #[repr(C)]
    pub struct hw_timer_t {
        _private: [u8; 0],
    }

    /// `portMUX_TYPE` (`spinlock_t` without debug fields)
    #[repr(C)]
    pub struct portMUX_TYPE {
        pub owner: u32,
        pub count: u32,
    }

    /// `SPINLOCK_FREE`
    pub const SPINLOCK_FREE: u32 = 0xB33F_FFFF;

    extern "C" {
        pub fn ledcSetup(channel: u8, freq: f64, resolution_bits: u8) -> f64;
        pub fn ledcWrite(channel: u8, duty: u32);
        pub fn ledcAttachPin(pin: u8, channel: u8);
        pub fn ledcDetachPin(pin: u8);

        pub fn timerBegin(num: u8, divider: u16, count_up: bool) -> *mut hw_timer_t;
        pub fn timerAttachInterrupt(timer: *mut hw_timer_t, callback: TimerCallback, edge: bool);
        pub fn timerAlarmWrite(timer: *mut hw_timer_t, alarm_value: u64, autoreload: bool);
        pub fn timerAlarmEnable(timer: *mut hw_timer_t);
        pub fn timerEnd(timer: *mut hw_timer_t);

        pub fn dac_output_enable(channel: dac_channel_t) -> esp_err_t;
        pub fn dac_output_voltage(channel: dac_channel_t, dac_value: u8) -> esp_err_t;

        pub fn xt_ints_on(mask: u32) -> u32;
        pub fn xt_ints_off(mask: u32) -> u32;

        pub fn vPortEnterCritical(mux: *mut portMUX_TYPE);
        pub fn vPortExitCritical(mux: *mut portMUX_TYPE);
    }
}

/// Hardware timer allocated by `timerBegin`
pub struct HwTimer(NonNull<sys::hw_timer_t>);

// The Arduino core hands out pointers into a static timer table.
unsafe impl Send for HwTimer {}

fn esp_result(code: sys::esp_err_t) -> HalResult<()> {
    if code == sys::ESP_OK {
        Ok(())
    } else {
        Err(HalError::Driver(code))
    }
}

/// Driver backed by the Arduino-ESP32 core
#[derive(Debug, Default)]
pub struct ArduinoDriver {
    _private: (),
}

impl ArduinoDriver {
    /// Create the driver
    ///
    /// The Arduino core must already be initialized (`initArduino`).
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl LedcDriver for ArduinoDriver {
    fn setup(&mut self, channel: PwmChannel, frequency: PwmFrequency, resolution_bits: u8) {
        let actual = unsafe { sys::ledcSetup(channel.raw(), frequency.as_hz(), resolution_bits) };
        if actual == 0.0 {
            warn!("ledcSetup({}) rejected {}", channel, frequency);
        }
    }

    fn write(&mut self, channel: PwmChannel, duty: u32) {
        unsafe { sys::ledcWrite(channel.raw(), duty) };
    }

    fn attach_pin(&mut self, pin: GpioPin, channel: PwmChannel) {
        unsafe { sys::ledcAttachPin(pin.raw(), channel.raw()) };
    }

    fn detach_pin(&mut self, pin: GpioPin) {
        unsafe { sys::ledcDetachPin(pin.raw()) };
    }
}

impl TimerDriver for ArduinoDriver {
    type Handle = HwTimer;

    fn begin(&mut self, index: TimerIndex, divider: u16, count_up: bool) -> Option<HwTimer> {
        NonNull::new(unsafe { sys::timerBegin(index.raw(), divider, count_up) }).map(HwTimer)
    }

    fn attach_interrupt(&mut self, timer: &HwTimer, callback: TimerCallback, edge: bool) {
        unsafe { sys::timerAttachInterrupt(timer.0.as_ptr(), callback, edge) };
    }

    fn alarm_write(&mut self, timer: &HwTimer, ticks: u64, auto_reload: bool) {
        unsafe { sys::timerAlarmWrite(timer.0.as_ptr(), ticks, auto_reload) };
    }

    fn alarm_enable(&mut self, timer: &HwTimer) {
        unsafe { sys::timerAlarmEnable(timer.0.as_ptr()) };
    }

    fn end(&mut self, timer: HwTimer) {
        unsafe { sys::timerEnd(timer.0.as_ptr()) };
    }
}

impl DacDriver for ArduinoDriver {
    fn output_enable(&mut self, channel: DacChannel) -> HalResult<()> {
        esp_result(unsafe { sys::dac_output_enable(sys::dac_channel_t::from(channel.raw())) })
    }

    fn output_voltage(&mut self, channel: DacChannel, level: DacLevel) -> HalResult<()> {
        esp_result(unsafe {
            sys::dac_output_voltage(sys::dac_channel_t::from(channel.raw()), level.raw())
        })
    }
}

impl InterruptDriver for ArduinoDriver {
    fn ints_off(&mut self, mask: InterruptMask) -> InterruptMask {
        InterruptMask::from_bits(unsafe { sys::xt_ints_off(mask.bits()) })
    }

    fn ints_on(&mut self, mask: InterruptMask) -> InterruptMask {
        InterruptMask::from_bits(unsafe { sys::xt_ints_on(mask.bits()) })
    }
}

/// Port spinlock shared by both cores
struct PortMux(UnsafeCell<sys::portMUX_TYPE>);

// Only ever touched through `vPortEnterCritical`/`vPortExitCritical`.
unsafe impl Sync for PortMux {}

static CRITICAL_SECTION_MUX: PortMux = PortMux(UnsafeCell::new(sys::portMUX_TYPE {
    owner: sys::SPINLOCK_FREE,
    count: 0,
}));

struct CriticalSection;

critical_section::set_impl!(CriticalSection);

// The port saves the interrupt level inside the mux and nests per core, so no
// restore state is carried.
unsafe impl critical_section::Impl for CriticalSection {
    unsafe fn acquire() -> critical_section::RawRestoreState {
        unsafe { sys::vPortEnterCritical(CRITICAL_SECTION_MUX.0.get()) };
    }

    unsafe fn release(_token: critical_section::RawRestoreState) {
        unsafe { sys::vPortExitCritical(CRITICAL_SECTION_MUX.0.get()) };
    }
}
