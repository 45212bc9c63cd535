//! Interrupt Masking Tests
//!
//! Run with: cargo test --no-default-features --features std --test interrupt_tests

mod common;

use common::{calls, hal, Call};
use project8x8_hal::prelude::*;

#[test]
fn block_disables_all_but_interrupt_six() {
    let mut hal = hal();
    hal.block_interrupts();

    assert_eq!(calls(&hal), &[Call::IntsOff { mask: 0xFFFF_FFBF }]);
}

#[test]
fn unblock_enables_every_interrupt() {
    let mut hal = hal();
    hal.unblock_interrupts();

    assert_eq!(calls(&hal), &[Call::IntsOn { mask: 0xFFFF_FFFF }]);
}

#[test]
fn block_leaves_reserved_interrupt_enabled() {
    let mut hal = hal();
    hal.driver_mut().intenable = (1 << 6) | (1 << 3) | 1;

    hal.block_interrupts();
    assert_eq!(hal.driver().intenable, 1 << RESERVED_CPU_INTERRUPT);

    hal.unblock_interrupts();
    assert_eq!(hal.driver().intenable, u32::MAX);
}

#[test]
fn interrupt_free_brackets_closure() {
    let mut hal = hal();
    let value = hal.interrupt_free(|hal| {
        hal.set_pwm_duty(0, 10);
        42
    });

    assert_eq!(value, 42);
    assert_eq!(
        calls(&hal),
        &[
            Call::IntsOff { mask: INTERRUPT_BLOCK_MASK },
            Call::LedcWrite { channel: 0, duty: 10 },
            Call::IntsOn { mask: INTERRUPT_UNBLOCK_MASK },
        ]
    );
}

#[test]
fn each_call_masks_exactly_once() {
    let mut hal = hal();
    hal.block_interrupts();
    hal.block_interrupts();
    hal.unblock_interrupts();

    assert_eq!(calls(&hal).len(), 3);
}
