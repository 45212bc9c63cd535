//! DAC Control
//!
//! Static voltage output on the two 8-bit DAC channels (GPIO25 and GPIO26).

use super::{discard, Hal};
use crate::driver::PeripheralDriver;
use crate::error::{HalError, HalResult};
use crate::types::{DacChannel, DacLevel};

fn dac_channel(raw: u8) -> HalResult<DacChannel> {
    DacChannel::new(raw).ok_or(HalError::InvalidDacChannel(raw))
}

impl<D: PeripheralDriver> Hal<D> {
    /// Enable a DAC channel's output
    ///
    /// # Errors
    ///
    /// [`HalError::Driver`] if the vendor driver rejects the call.
    pub fn enable_dac(&mut self, channel: DacChannel) -> HalResult<()> {
        self.driver.output_enable(channel)?;
        trace!("{} enabled on GPIO{}", channel, channel.pin());
        Ok(())
    }

    /// Drive a DAC channel to `level`
    ///
    /// # Errors
    ///
    /// [`HalError::Driver`] if the vendor driver rejects the call.
    pub fn write_dac_level(&mut self, channel: DacChannel, level: DacLevel) -> HalResult<()> {
        self.driver.output_voltage(channel, level)
    }

    /// Initialize DAC `channel` (1-2)
    pub fn setup_dac(&mut self, channel: u8) {
        let result = dac_channel(channel).and_then(|ch| self.enable_dac(ch));
        discard("setup_dac", result);
    }

    /// Output `value` on DAC `channel` (1-2); 0 is 0V and 255 is 3.3V
    pub fn write_dac(&mut self, channel: u8, value: u8) {
        let result =
            dac_channel(channel).and_then(|ch| self.write_dac_level(ch, DacLevel::from_raw(value)));
        discard("write_dac", result);
    }
}
