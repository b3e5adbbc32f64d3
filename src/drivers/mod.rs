//! Actuator drivers.

pub mod pwm_output;
