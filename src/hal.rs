//! Hardware Abstraction Layer
//!
//! [`Hal`] is the single context object for the board's peripherals. It owns
//! the vendor driver and the registry of hardware timer handles, so no
//! peripheral state lives in globals.
//!
//! Every peripheral family has two layers of operations:
//!
//! - typed operations taking validated values and returning [`HalResult`]
//! - raw operations taking primitive integers, used by the C exports, which
//!   drop invalid input without touching hardware and without reporting it
//!
//! [`HalResult`]: crate::error::HalResult

pub mod dac;
pub mod interrupt;
pub mod pwm;
pub mod timer;

pub use pwm::PwmOutput;
pub use timer::{TimerConfig, TimerRegistry};

use crate::driver::PeripheralDriver;
use crate::error::HalResult;

/// Peripheral context
pub struct Hal<D: PeripheralDriver> {
    driver: D,
    timers: TimerRegistry<D::Handle>,
    timer_config: TimerConfig,
}

impl<D: PeripheralDriver> Hal<D> {
    /// Create a context with the default timer configuration (1 MHz, up, edge, auto-reload)
    #[must_use]
    pub fn new(driver: D) -> Self {
        Self::with_timer_config(driver, TimerConfig::default())
    }

    /// Create a context with a custom timer configuration
    #[must_use]
    pub fn with_timer_config(driver: D, timer_config: TimerConfig) -> Self {
        Self {
            driver,
            timers: TimerRegistry::new(),
            timer_config,
        }
    }

    /// Get the underlying driver
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Get the underlying driver mutably
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Get the timer registry
    #[must_use]
    pub const fn timers(&self) -> &TimerRegistry<D::Handle> {
        &self.timers
    }

    /// Get the timer configuration
    #[must_use]
    pub const fn timer_config(&self) -> &TimerConfig {
        &self.timer_config
    }

    /// Tear down the context, returning the driver
    ///
    /// Handles still in the registry are dropped without ending their timers.
    pub fn release(self) -> D {
        self.driver
    }
}

/// Log and drop the outcome of a raw operation
fn discard(operation: &str, result: HalResult<()>) {
    if let Err(err) = result {
        if err.is_invalid_parameter() {
            debug!("{}: ignored, {}", operation, err);
        } else {
            warn!("{}: {}", operation, err);
        }
    }
}
