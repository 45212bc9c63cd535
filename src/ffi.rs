//! C exports
//!
//! The board header's functions, with their original names and signatures,
//! backed by one [`Hal`] over the Arduino core. The context is created on
//! first use and guarded by a critical section, so these may be called from
//! both the main loop and interrupt handlers.
//!
//! Every export returns `void`; invalid parameters are dropped.

#![allow(unsafe_code)]
#![allow(non_snake_case)]

use core::cell::RefCell;

use critical_section::Mutex;

use crate::driver::arduino::ArduinoDriver;
use crate::hal::Hal;
use crate::types::TimerCallback;

static HAL: Mutex<RefCell<Option<Hal<ArduinoDriver>>>> = Mutex::new(RefCell::new(None));

fn with_hal<R>(f: impl FnOnce(&mut Hal<ArduinoDriver>) -> R) -> R {
    critical_section::with(|cs| {
        let mut slot = HAL.borrow_ref_mut(cs);
        let hal = slot.get_or_insert_with(|| Hal::new(ArduinoDriver::new()));
        f(hal)
    })
}

/// Block all interrupts except CPU interrupt 6
#[no_mangle]
pub extern "C" fn blockInterrupts() {
    with_hal(Hal::block_interrupts);
}

/// Unblock enabled interrupts
#[no_mangle]
pub extern "C" fn unblockInterrupts() {
    with_hal(Hal::unblock_interrupts);
}

/// Configure PWM channel `chan` (0-15) at `freq` Hz (1-312500)
#[no_mangle]
pub extern "C" fn setupPwm(chan: u8, freq: f64) {
    with_hal(|hal| hal.setup_pwm(chan, freq));
}

/// Set PWM channel `chan` (0-15) duty, 0 = 0% and 255 = 100%
#[no_mangle]
pub extern "C" fn setPwmDuty(chan: u8, duty: u16) {
    with_hal(|hal| hal.set_pwm_duty(chan, duty));
}

/// Output PWM channel `chan` (0-15) on GPIO `pin` (0-39)
#[no_mangle]
pub extern "C" fn pwmAttachPin(chan: u8, pin: u8) {
    with_hal(|hal| hal.pwm_attach_pin(chan, pin));
}

/// Detach GPIO `pin` (0-39) from its PWM channel
#[no_mangle]
pub extern "C" fn pwmDetachPin(pin: u8) {
    with_hal(|hal| hal.pwm_detach_pin(pin));
}

/// Set up timer `timer_index` (0-3) to call `f` every `period` microseconds
#[no_mangle]
pub extern "C" fn setUpTimer(timer_index: u8, f: Option<TimerCallback>, period: u64) {
    with_hal(|hal| hal.setup_timer(timer_index, f, period));
}

/// Start timer `timer_index` (0-3)
#[no_mangle]
pub extern "C" fn startTimer(timer_index: u8) {
    with_hal(|hal| hal.start_timer(timer_index));
}

/// Stop timer `timer_index` (0-3)
#[no_mangle]
pub extern "C" fn stopTimer(timer_index: u8) {
    with_hal(|hal| hal.stop_timer(timer_index));
}

/// Change the period of timer `timer_index` (0-3) to `period` microseconds
#[no_mangle]
pub extern "C" fn changeTimerPeriod(timer_index: u8, period: u64) {
    with_hal(|hal| hal.change_timer_period(timer_index, period));
}

/// Initialize DAC `channel` (1-2)
#[no_mangle]
pub extern "C" fn setUpDAC(channel: u8) {
    with_hal(|hal| hal.setup_dac(channel));
}

/// Output `value` on DAC `channel` (1-2), 0 = 0V and 255 = 3.3V
#[no_mangle]
pub extern "C" fn writeToDAC(channel: u8, value: u8) {
    with_hal(|hal| hal.write_dac(channel, value));
}
