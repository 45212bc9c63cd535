//! PWM Control
//!
//! LEDC channel configuration, duty updates and pin routing. All channels
//! run at 8-bit duty resolution.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use super::{discard, Hal};
use crate::config::PWM_RESOLUTION_BITS;
use crate::driver::PeripheralDriver;
use crate::error::{HalError, HalResult};
use crate::types::{DutyCycle, GpioPin, PwmChannel, PwmFrequency};

fn channel(raw: u8) -> HalResult<PwmChannel> {
    PwmChannel::new(raw).ok_or(HalError::InvalidPwmChannel(raw))
}

fn pin(raw: u8) -> HalResult<GpioPin> {
    GpioPin::new(raw).ok_or(HalError::InvalidPin(raw))
}

impl<D: PeripheralDriver> Hal<D> {
    /// Configure a channel to generate PWM at `frequency`
    ///
    /// The signal only reaches a pin after [`attach_pin`](Self::attach_pin).
    ///
    /// # Errors
    ///
    /// Infallible for validated inputs; the `Result` keeps the typed API uniform.
    pub fn configure_pwm(&mut self, channel: PwmChannel, frequency: PwmFrequency) -> HalResult<()> {
        self.driver.setup(channel, frequency, PWM_RESOLUTION_BITS);
        trace!("{} configured at {}", channel, frequency);
        Ok(())
    }

    /// Set a channel's duty cycle
    ///
    /// # Errors
    ///
    /// Infallible for validated inputs.
    pub fn set_duty(&mut self, channel: PwmChannel, duty: DutyCycle) -> HalResult<()> {
        self.driver.write(channel, u32::from(duty.raw()));
        trace!("{} duty {}", channel, duty.raw());
        Ok(())
    }

    /// Route a channel to an output pin
    ///
    /// # Errors
    ///
    /// Infallible for validated inputs.
    pub fn attach_pin(&mut self, channel: PwmChannel, pin: GpioPin) -> HalResult<()> {
        if pin.is_input_only() {
            debug!("{} is input only, attaching {} anyway", pin, channel);
        }
        self.driver.attach_pin(pin, channel);
        trace!("{} attached to {}", channel, pin);
        Ok(())
    }

    /// Disconnect a pin from whatever channel drives it
    ///
    /// # Errors
    ///
    /// Infallible for validated inputs.
    pub fn detach_pin(&mut self, pin: GpioPin) -> HalResult<()> {
        self.driver.detach_pin(pin);
        trace!("{} detached", pin);
        Ok(())
    }

    /// Borrow one channel as an [`embedded_hal`] PWM output
    #[must_use]
    pub fn pwm_output(&mut self, channel: PwmChannel) -> PwmOutput<'_, D> {
        PwmOutput { hal: self, channel }
    }

    /// Configure channel `chan` at `freq` Hz (1-312500, channel 0-15)
    pub fn setup_pwm(&mut self, chan: u8, freq: f64) {
        let result = channel(chan).and_then(|ch| {
            let frequency = PwmFrequency::from_hz(freq).ok_or(HalError::InvalidPwmFrequency(freq))?;
            self.configure_pwm(ch, frequency)
        });
        discard("setup_pwm", result);
    }

    /// Set the duty of channel `chan` (0-15); 0 is 0% and 255 is 100%
    pub fn set_pwm_duty(&mut self, chan: u8, duty: u16) {
        let result = channel(chan).and_then(|ch| self.set_duty(ch, DutyCycle::from_raw(duty)));
        discard("set_pwm_duty", result);
    }

    /// Output channel `chan` (0-15) on GPIO `pin` (0-39)
    pub fn pwm_attach_pin(&mut self, chan: u8, pin_num: u8) {
        let result = channel(chan)
            .and_then(|ch| pin(pin_num).map(|p| (ch, p)))
            .and_then(|(ch, p)| self.attach_pin(ch, p));
        discard("pwm_attach_pin", result);
    }

    /// Detach GPIO `pin` (0-39) from the LEDC
    pub fn pwm_detach_pin(&mut self, pin_num: u8) {
        let result = pin(pin_num).and_then(|p| self.detach_pin(p));
        discard("pwm_detach_pin", result);
    }
}

/// A single LEDC channel exposed through [`SetDutyCycle`]
pub struct PwmOutput<'a, D: PeripheralDriver> {
    hal: &'a mut Hal<D>,
    channel: PwmChannel,
}

impl<D: PeripheralDriver> PwmOutput<'_, D> {
    /// Channel driven by this output
    #[must_use]
    pub const fn channel(&self) -> PwmChannel {
        self.channel
    }
}

impl<D: PeripheralDriver> ErrorType for PwmOutput<'_, D> {
    type Error = Infallible;
}

impl<D: PeripheralDriver> SetDutyCycle for PwmOutput<'_, D> {
    fn max_duty_cycle(&self) -> u16 {
        DutyCycle::FULL.raw()
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.hal.driver.write(self.channel, u32::from(duty));
        trace!("{} duty {}", self.channel, duty);
        Ok(())
    }
}
