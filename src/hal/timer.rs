//! Timer Interrupt Control
//!
//! Periodic alarms on the four general purpose timers. Handles returned by
//! the vendor live in a fixed [`TimerRegistry`] indexed by [`TimerIndex`],
//! replacing one global per timer.
//!
//! Lifecycle of a slot: `setup_timer` fills it, `start_timer` and
//! `change_timer_period` use it, `stop_timer` empties it. The alarm callback
//! runs in interrupt context and may preempt any of these calls.

use super::{discard, Hal};
use crate::config::{APB_CLOCK_HZ, TIMER_COUNT, TIMER_DIVIDER};
use crate::driver::PeripheralDriver;
use crate::error::{HalError, HalResult};
use crate::types::{TimerCallback, TimerIndex};

/// Hardware timer configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerConfig {
    /// APB clock prescaler (2-65535)
    pub divider: u16,
    /// Count up rather than down
    pub count_up: bool,
    /// Edge-triggered rather than level-triggered interrupt
    pub edge_interrupt: bool,
    /// Reload the counter when the alarm fires
    pub auto_reload: bool,
}

impl TimerConfig {
    /// Create the default configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            divider: TIMER_DIVIDER,
            count_up: true,
            edge_interrupt: true,
            auto_reload: true,
        }
    }

    /// Set the prescaler
    #[must_use]
    pub const fn divider(mut self, divider: u16) -> Self {
        self.divider = divider;
        self
    }

    /// Set the count direction
    #[must_use]
    pub const fn count_up(mut self, count_up: bool) -> Self {
        self.count_up = count_up;
        self
    }

    /// Set edge or level interrupts
    #[must_use]
    pub const fn edge_interrupt(mut self, edge: bool) -> Self {
        self.edge_interrupt = edge;
        self
    }

    /// Set alarm auto-reload
    #[must_use]
    pub const fn auto_reload(mut self, auto_reload: bool) -> Self {
        self.auto_reload = auto_reload;
        self
    }

    /// Counter rate in Hz
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn tick_hz(&self) -> u32 {
        // A divider of 0 is treated by the hardware as 65536.
        let divider = if self.divider == 0 { 65_536 } else { self.divider as u32 };
        APB_CLOCK_HZ / divider
    }

    /// Convert a period in microseconds to counter ticks (saturating)
    #[must_use]
    pub fn ticks_for_micros(&self, period_us: u64) -> u64 {
        let ticks = u128::from(period_us) * u128::from(self.tick_hz()) / 1_000_000;
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-size table of allocated timer handles
pub struct TimerRegistry<H> {
    slots: [Option<H>; TIMER_COUNT],
}

impl<H> TimerRegistry<H> {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }

    /// Get the handle for a timer
    #[must_use]
    pub fn get(&self, index: TimerIndex) -> Option<&H> {
        self.slots[index.slot()].as_ref()
    }

    /// Store a handle, returning the one it replaced
    pub fn insert(&mut self, index: TimerIndex, handle: H) -> Option<H> {
        self.slots[index.slot()].replace(handle)
    }

    /// Remove and return a handle
    pub fn take(&mut self, index: TimerIndex) -> Option<H> {
        self.slots[index.slot()].take()
    }

    /// Check whether a timer has been set up
    #[must_use]
    pub fn is_configured(&self, index: TimerIndex) -> bool {
        self.slots[index.slot()].is_some()
    }

    /// Iterate over the timers currently set up
    pub fn configured(&self) -> impl Iterator<Item = TimerIndex> + '_ {
        TimerIndex::all().filter(|&index| self.is_configured(index))
    }

    /// Number of timers currently set up
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no timer is set up
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for TimerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

fn validated_index(raw: u8) -> HalResult<TimerIndex> {
    TimerIndex::new(raw).ok_or(HalError::InvalidTimer(raw))
}

impl<D: PeripheralDriver> Hal<D> {
    /// Allocate a timer, attach `callback` and program a `period_us` alarm
    ///
    /// The alarm does not fire until [`start_timer_alarm`](Self::start_timer_alarm).
    /// Setting up an index again replaces its handle.
    ///
    /// # Errors
    ///
    /// [`HalError::TimerAllocationFailed`] if the vendor could not allocate the
    /// timer. The slot is left empty, even if it held a handle before.
    pub fn configure_timer(
        &mut self,
        index: TimerIndex,
        callback: TimerCallback,
        period_us: u64,
    ) -> HalResult<()> {
        let config = self.timer_config;
        if self.timers.take(index).is_some() {
            debug!("{} set up again, previous handle replaced", index);
        }
        let timer = self
            .driver
            .begin(index, config.divider, config.count_up)
            .ok_or(HalError::TimerAllocationFailed(index))?;
        self.driver.attach_interrupt(&timer, callback, config.edge_interrupt);
        self.driver
            .alarm_write(&timer, config.ticks_for_micros(period_us), config.auto_reload);

        self.timers.insert(index, timer);
        if index.is_reserved_for_adc() {
            debug!("{} is reserved for ADC sampling", index);
        }
        trace!("{} set up with {} us period", index, period_us);
        Ok(())
    }

    /// Enable the alarm of a set-up timer
    ///
    /// # Errors
    ///
    /// [`HalError::TimerNotConfigured`] if the slot is empty.
    pub fn start_timer_alarm(&mut self, index: TimerIndex) -> HalResult<()> {
        let timer = self
            .timers
            .get(index)
            .ok_or(HalError::TimerNotConfigured(index))?;
        self.driver.alarm_enable(timer);
        Ok(())
    }

    /// End a timer and release its handle
    ///
    /// # Errors
    ///
    /// [`HalError::TimerNotConfigured`] if the slot is empty.
    pub fn end_timer(&mut self, index: TimerIndex) -> HalResult<()> {
        let timer = self
            .timers
            .take(index)
            .ok_or(HalError::TimerNotConfigured(index))?;
        self.driver.end(timer);
        trace!("{} stopped", index);
        Ok(())
    }

    /// Reprogram the alarm period of a set-up timer
    ///
    /// # Errors
    ///
    /// [`HalError::TimerNotConfigured`] if the slot is empty.
    pub fn set_timer_period(&mut self, index: TimerIndex, period_us: u64) -> HalResult<()> {
        let config = self.timer_config;
        let timer = self
            .timers
            .get(index)
            .ok_or(HalError::TimerNotConfigured(index))?;
        self.driver
            .alarm_write(timer, config.ticks_for_micros(period_us), config.auto_reload);
        Ok(())
    }

    /// Set up timer `timer_index` (0-3) to call `callback` every `period` microseconds
    pub fn setup_timer(&mut self, timer_index: u8, callback: Option<TimerCallback>, period: u64) {
        let result = validated_index(timer_index).and_then(|index| {
            let callback = callback.ok_or(HalError::MissingCallback)?;
            self.configure_timer(index, callback, period)
        });
        discard("setup_timer", result);
    }

    /// Start timer `timer_index` (0-3)
    pub fn start_timer(&mut self, timer_index: u8) {
        let result = validated_index(timer_index).and_then(|index| self.start_timer_alarm(index));
        discard("start_timer", result);
    }

    /// Stop timer `timer_index` (0-3)
    pub fn stop_timer(&mut self, timer_index: u8) {
        let result = validated_index(timer_index).and_then(|index| self.end_timer(index));
        discard("stop_timer", result);
    }

    /// Change the period of timer `timer_index` (0-3) to `period` microseconds
    pub fn change_timer_period(&mut self, timer_index: u8, period: u64) {
        let result = validated_index(timer_index).and_then(|index| self.set_timer_period(index, period));
        discard("change_timer_period", result);
    }
}
