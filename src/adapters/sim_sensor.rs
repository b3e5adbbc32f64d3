//! Scripted thermocouple for host runs.
//!
//! Plays back a fixed list of readings, one per [`SensorPort::read`],
//! wrapping at the end. Until [`SensorPort::begin`] is called every read
//! reports "no communication", like an unpowered converter.

use log::debug;

use crate::app::ports::SensorPort;
use crate::app::status::{STATUS_NO_COMMUNICATION, STATUS_OK, STATUS_OPEN_CIRCUIT};
use crate::error::SensorError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimReading {
    pub status: i32,
    pub temperature_c: f32,
    pub internal_c: f32,
}

impl SimReading {
    pub const fn ok(temperature_c: f32) -> Self {
        Self {
            status: STATUS_OK,
            temperature_c,
            internal_c: 25.0,
        }
    }

    pub const fn with_status(status: i32, temperature_c: f32) -> Self {
        Self {
            status,
            temperature_c,
            internal_c: 25.0,
        }
    }
}

/// Pack a reading into a MAX31855-style frame so the diagnostic variant has
/// realistic bits to print: 14-bit quarter-degrees in D31..D18, the fault
/// flag in D16, 12-bit sixteenth-degrees in D15..D4, fault bits in D2..D0.
fn pack_frame(r: &SimReading) -> u32 {
    let tc = ((r.temperature_c * 4.0) as i32 as u32) & 0x3FFF;
    let cj = ((r.internal_c * 16.0) as i32 as u32) & 0x0FFF;
    let fault_bits = (r.status as u32) & 0x07;
    let fault = u32::from(fault_bits != 0);
    (tc << 18) | (fault << 16) | (cj << 4) | fault_bits
}

pub struct SimulatedThermocouple {
    script: Vec<SimReading>,
    cursor: usize,
    latched: Option<SimReading>,
    bus_up: bool,
    bus_speed_hz: u32,
}

impl SimulatedThermocouple {
    /// `script` must not be empty; an empty script always reads "no communication".
    pub fn new(script: Vec<SimReading>) -> Self {
        Self {
            script,
            cursor: 0,
            latched: None,
            bus_up: false,
            bus_speed_hz: 0,
        }
    }

    /// Heat-up and cool-down of a small enclosure, with a loose-wire blip
    /// and a short bus dropout part-way through.
    pub fn warm_up_profile() -> Self {
        let mut script = Vec::new();
        for step in 0..=30 {
            script.push(SimReading::ok(22.0 + step as f32 * 2.4));
        }
        script.push(SimReading::with_status(STATUS_OPEN_CIRCUIT, 2047.75));
        script.push(SimReading::with_status(STATUS_NO_COMMUNICATION, 0.0));
        script.push(SimReading::with_status(STATUS_NO_COMMUNICATION, 0.0));
        for step in (0..=30).rev() {
            script.push(SimReading::ok(22.0 + step as f32 * 2.4));
        }
        Self::new(script)
    }

    pub fn bus_speed_hz(&self) -> u32 {
        self.bus_speed_hz
    }
}

impl SensorPort for SimulatedThermocouple {
    fn begin(&mut self) -> Result<(), SensorError> {
        self.bus_up = true;
        Ok(())
    }

    fn set_bus_speed(&mut self, hz: u32) {
        debug!("sim bus speed {} Hz", hz);
        self.bus_speed_hz = hz;
    }

    fn read(&mut self) -> i32 {
        if !self.bus_up || self.script.is_empty() {
            self.latched = None;
            return STATUS_NO_COMMUNICATION;
        }
        let r = self.script[self.cursor % self.script.len()];
        self.cursor = self.cursor.wrapping_add(1);
        self.latched = Some(r);
        r.status
    }

    fn temperature_c(&self) -> f32 {
        self.latched.map_or(0.0, |r| r.temperature_c)
    }

    fn internal_reference_c(&self) -> f32 {
        self.latched.map_or(0.0, |r| r.internal_c)
    }

    fn raw_frame(&self) -> u32 {
        self.latched.as_ref().map_or(0, pack_frame)
    }
}
