//! Proportional output driver (fan / LED) over an embedded-hal PWM channel.
//!
//! Scales the 8-bit actuator command onto whatever duty resolution the
//! channel offers (`max_duty_cycle()`), so the same driver serves an 8-bit
//! LEDC timer and a 16-bit TIM channel.
//!
//! ## Dual-target design
//!
//! On a board: wrap the HAL's PWM channel.
//! On host/test: wrap [`HostPwmChannel`], which only records the duty.

use core::convert::Infallible;

use embedded_hal::pwm::{Error as _, ErrorType, SetDutyCycle};
use log::{debug, warn};

use crate::app::ports::ActuatorPort;
use crate::control::actuator::COMMAND_MAX;
use crate::error::ActuatorError;

pub struct PwmActuator<P> {
    channel: P,
    command: u8,
}

impl<P: SetDutyCycle> PwmActuator<P> {
    pub fn new(channel: P) -> Self {
        Self {
            channel,
            command: 0,
        }
    }

    /// Last command successfully written.
    pub fn command(&self) -> u8 {
        self.command
    }

    pub fn channel(&self) -> &P {
        &self.channel
    }
}

impl<P: SetDutyCycle> ActuatorPort for PwmActuator<P> {
    fn set_output(&mut self, command: u8) -> Result<(), ActuatorError> {
        self.channel
            .set_duty_cycle_fraction(u16::from(command), u16::from(COMMAND_MAX))
            .map_err(|e| {
                warn!("PWM write failed: {:?}", e.kind());
                ActuatorError::PwmWriteFailed
            })?;
        if command != self.command {
            debug!("PWM command {} -> {}", self.command, command);
        }
        self.command = command;
        Ok(())
    }
}

/// In-memory PWM channel for host runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPwmChannel {
    max_duty: u16,
    duty: u16,
}

impl HostPwmChannel {
    pub fn new(max_duty: u16) -> Self {
        Self { max_duty, duty: 0 }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

impl ErrorType for HostPwmChannel {
    type Error = Infallible;
}

impl SetDutyCycle for HostPwmChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty.min(self.max_duty);
        Ok(())
    }
}
