//! Control core: filter, extrema tracker and actuator mapping.
//!
//! [`ControllerState`] is the only persistent state in the system. The loop
//! driver owns one and hands it to [`ControllerState::apply`] once per cycle;
//! nothing here performs I/O.

pub mod actuator;
pub mod extrema;
pub mod filter;

use crate::app::status::{StatusCategory, classify};
use actuator::ActuatorMapping;
use extrema::ExtremaState;
use filter::FilterState;

/// One poll of the sensor port. Lives for a single cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Raw status code as returned by the driver.
    pub status: i32,
    /// Converted thermocouple temperature. `None` when conversion was skipped.
    pub temperature_c: Option<f32>,
    /// Raw 32-bit frame (diagnostic variant only).
    pub raw_frame: Option<u32>,
    /// Cold-junction reference temperature (diagnostic variant only).
    pub internal_c: Option<f32>,
}

impl Reading {
    pub fn category(&self) -> StatusCategory {
        classify(self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Reading processed; state updated.
    Nominal,
    /// Reading discarded; state untouched.
    Faulted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    pub filter: FilterState,
    pub extrema: ExtremaState,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one reading into the state.
    ///
    /// A communication failure (or a reading without a temperature) leaves
    /// every field exactly as it was.
    pub fn apply(&mut self, reading: &Reading, window: u16) -> CycleOutcome {
        if reading.category().aborts_cycle() {
            return CycleOutcome::Faulted;
        }
        let Some(sample_c) = reading.temperature_c else {
            return CycleOutcome::Faulted;
        };

        let first = !self.filter.initialized;
        let prev_avg = self.filter.average_c;
        self.filter = self.filter.update(sample_c, window);
        let avg_changed = first || self.filter.average_c != prev_avg;
        self.extrema = self
            .extrema
            .update(self.filter.average_c, first, avg_changed);
        CycleOutcome::Nominal
    }

    /// Actuator command for the current (possibly stale) average.
    pub fn command(&self, mapping: &ActuatorMapping) -> u8 {
        mapping.command(self.filter.average_c)
    }

    pub fn average_c(&self) -> i32 {
        self.filter.average_c
    }

    pub fn changed(&self) -> bool {
        self.extrema.changed
    }

    pub fn clear_changed(&mut self) {
        self.extrema.clear_changed();
    }
}
