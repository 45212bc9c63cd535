//! Interrupt Masking
//!
//! Global enable/disable of CPU interrupts through the Xtensa `INTENABLE`
//! register. CPU interrupt 6 stays enabled while blocked.
//!
//! Nothing in this crate takes a lock; callers bracket their own critical
//! sections against timer callbacks with these operations.

use super::Hal;
use crate::driver::PeripheralDriver;
use crate::types::InterruptMask;

impl<D: PeripheralDriver> Hal<D> {
    /// Temporarily block all interrupts except the reserved one
    ///
    /// Undo with [`unblock_interrupts`](Self::unblock_interrupts).
    pub fn block_interrupts(&mut self) {
        let previous = self.driver.ints_off(InterruptMask::BLOCK);
        trace!("interrupts blocked, previous mask {}", previous.bits());
    }

    /// Unblock every enabled interrupt
    pub fn unblock_interrupts(&mut self) {
        self.driver.ints_on(InterruptMask::ALL);
    }

    /// Run `f` with interrupts blocked
    pub fn interrupt_free<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.block_interrupts();
        let result = f(self);
        self.unblock_interrupts();
        result
    }
}
