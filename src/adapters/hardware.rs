//! Hardware adapter: bundles the sensor bus and the output channel.
//!
//! [`AppService::tick`](crate::app::service::AppService::tick) takes one
//! value that is both a [`SensorPort`] and an [`ActuatorPort`]. This
//! adapter forwards each trait to the component that owns it.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::error::{ActuatorError, SensorError};

pub struct HardwareAdapter<S, A> {
    sensor: S,
    actuator: A,
}

impl<S: SensorPort, A: ActuatorPort> HardwareAdapter<S, A> {
    pub fn new(sensor: S, actuator: A) -> Self {
        Self { sensor, actuator }
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<S: SensorPort, A> SensorPort for HardwareAdapter<S, A> {
    fn begin(&mut self) -> Result<(), SensorError> {
        self.sensor.begin()
    }

    fn set_bus_speed(&mut self, hz: u32) {
        self.sensor.set_bus_speed(hz);
    }

    fn read(&mut self) -> i32 {
        self.sensor.read()
    }

    fn temperature_c(&self) -> f32 {
        self.sensor.temperature_c()
    }

    fn internal_reference_c(&self) -> f32 {
        self.sensor.internal_reference_c()
    }

    fn raw_frame(&self) -> u32 {
        self.sensor.raw_frame()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<S, A: ActuatorPort> ActuatorPort for HardwareAdapter<S, A> {
    fn set_output(&mut self, command: u8) -> Result<(), ActuatorError> {
        self.actuator.set_output(command)
    }
}
