//! Project 8x8 Hardware Abstraction Layer
//!
//! Bounds-checked entry points for the ESP32 peripherals used by the
//! project8x8 board: LEDC PWM channels, the four general purpose hardware
//! timers, the two 8-bit DACs and the Xtensa interrupt enable mask.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     C EXPORTS (ffi)                          │
//! │  setupPwm │ setUpTimer │ writeToDAC │ blockInterrupts  ...   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    CONTEXT (hal::Hal)                        │
//! │  PWM  │  Timer registry [0..=3]  │  DAC  │  Interrupt mask   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   DRIVER SEAM (driver)                       │
//! │  LedcDriver │ TimerDriver │ DacDriver │ InterruptDriver      │
//! ├─────────────────────────────────────────────────────────────┤
//! │               VENDOR CORE (Arduino-ESP32 / IDF)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Silent rejection at the edge**: the raw operations drop out-of-range
//!   parameters without touching hardware and without reporting an error
//! - **Type-driven core**: the typed operations only accept validated values
//!   and return `Result`
//! - **No hidden globals**: timer handles live in a registry owned by [`hal::Hal`]
//! - **No unsafe in the context layer**: all unsafe is isolated in the vendor
//!   bindings and the C exports

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

/// Board configuration and constants
pub mod config;

/// Error types
pub mod error;

/// Validated parameter types
pub mod types;

/// Vendor driver seam
///
/// Traits implemented by the vendor peripheral driver (or a test double).
pub mod driver;

/// Hardware Abstraction Layer
///
/// The context object and its PWM, timer, DAC and interrupt operations.
pub mod hal;

/// C exports matching the original board header
#[cfg(feature = "embedded")]
pub mod ffi;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::driver::{DacDriver, InterruptDriver, LedcDriver, PeripheralDriver, TimerDriver};
    pub use crate::error::{HalError, HalResult};
    pub use crate::hal::{Hal, PwmOutput, TimerConfig, TimerRegistry};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::pwm::SetDutyCycle;
}
