//! Application service: the loop driver.
//!
//! [`AppService`] owns the [`ControllerState`] and the loop configuration.
//! All I/O flows through port traits injected at call sites, making the
//! entire cycle testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ ReportSink
//!                 │        AppService         │ ──▶ DisplaySink
//! ActuatorPort ◀──│ classify · filter · map   │
//!                 └──────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::LoopConfig;
use crate::control::actuator::ActuatorMapping;
use crate::control::{ControllerState, CycleOutcome, Reading};
use crate::error::Result;

use super::events::{AppEvent, CycleReport};
use super::ports::{ActuatorPort, DisplaySink, ReportSink, SensorPort};
use super::status::classify;

/// One rendered display row.
pub type DisplayLine = heapless::String<32>;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService {
    config: LoopConfig,
    mapping: ActuatorMapping,
    state: ControllerState,
    cycle_count: u64,
    last_command: u8,
}

impl AppService {
    /// Construct the service. Does **not** touch the bus; call [`start`](Self::start) next.
    pub fn new(config: LoopConfig) -> Self {
        let mapping = config.mapping();
        Self {
            config,
            mapping,
            state: ControllerState::new(),
            cycle_count: 0,
            last_command: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring the sensor bus up and wait for the converter to settle.
    pub fn start(
        &mut self,
        hw: &mut impl SensorPort,
        sink: &mut impl ReportSink,
        delay: &mut impl DelayNs,
    ) -> Result<()> {
        hw.begin()?;
        hw.set_bus_speed(self.config.bus_speed_hz);
        delay.delay_ms(self.config.startup_delay_ms);

        sink.emit(&AppEvent::Started {
            variant: self.config.variant,
            bus_speed_hz: self.config.bus_speed_hz,
        });
        info!(
            "AppService started ({:?}, bus {} Hz, period {} ms)",
            self.config.variant, self.config.bus_speed_hz, self.config.cycle_period_ms
        );
        Ok(())
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: poll → classify → filter → track → map → report.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], mirroring a single board adapter. The inter-cycle
    /// sleep is not part of the tick; see [`crate::scheduler`].
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl ReportSink,
        display: &mut impl DisplaySink,
        delay: &mut impl DelayNs,
    ) -> CycleOutcome {
        self.cycle_count += 1;

        // 1. Poll
        let reading = self.poll(hw);
        let category = reading.category();

        // 2. Filter + extrema (no-op on communication failure)
        let outcome = self.state.apply(&reading, self.config.filter_window);
        match outcome {
            CycleOutcome::Faulted => {
                warn!("Sensor not responding; holding average at {} C", self.state.average_c());
            }
            CycleOutcome::Nominal => {
                if category.fault_class().is_some() {
                    warn!("Sensor status {} ({})", reading.status, category);
                }
                if self.state.average_c() > self.config.temp_ceiling_c {
                    warn!(
                        "Average {} C above ceiling {} C (output mapping unchanged)",
                        self.state.average_c(),
                        self.config.temp_ceiling_c
                    );
                }
            }
        }

        // 3. Actuator, recomputed every cycle even from a stale average
        let command = self.state.command(&self.mapping);
        if let Err(e) = hw.set_output(command) {
            warn!("Actuator write failed: {}", e);
        }
        self.last_command = command;

        // 4. Report
        sink.emit(&AppEvent::Cycle(self.build_report(outcome, &reading)));

        // 5. Display refresh, only when something visible moved
        if outcome == CycleOutcome::Nominal {
            if self.config.variant.has_display() && self.state.changed() {
                self.refresh_display(display, delay);
            }
            self.state.clear_changed();
        }

        outcome
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Command written on the most recent cycle.
    pub fn last_command(&self) -> u8 {
        self.last_command
    }

    /// The two display rows for the current state.
    pub fn summary_lines(&self) -> (DisplayLine, DisplayLine) {
        let mut top = DisplayLine::new();
        let mut bottom = DisplayLine::new();
        // Capacity covers the widest i32 rendering; writes cannot overflow.
        let _ = write!(top, "Temp: {} C", self.state.average_c());
        let _ = write!(
            bottom,
            "Min:{} Max:{}",
            self.state.extrema.min_c, self.state.extrema.max_c
        );
        (top, bottom)
    }

    // ── Internal ──────────────────────────────────────────────

    fn poll(&self, hw: &mut impl SensorPort) -> Reading {
        let status = hw.read();
        if classify(status).aborts_cycle() {
            return Reading {
                status,
                temperature_c: None,
                raw_frame: None,
                internal_c: None,
            };
        }

        let diagnostic = self.config.variant.reports_raw_frame();
        Reading {
            status,
            temperature_c: Some(hw.temperature_c()),
            raw_frame: diagnostic.then(|| hw.raw_frame()),
            internal_c: diagnostic.then(|| hw.internal_reference_c()),
        }
    }

    fn build_report(&self, outcome: CycleOutcome, reading: &Reading) -> CycleReport {
        CycleReport {
            cycle: self.cycle_count,
            outcome,
            status: reading.category(),
            status_code: reading.status,
            temperature_c: reading.temperature_c,
            raw_frame: reading.raw_frame,
            internal_c: reading.internal_c,
            average_c: self.state.average_c(),
            min_c: self.state.extrema.min_c,
            max_c: self.state.extrema.max_c,
            command: self.last_command,
        }
    }

    fn refresh_display(&self, display: &mut impl DisplaySink, delay: &mut impl DelayNs) {
        let (top, bottom) = self.summary_lines();
        display.clear();
        delay.delay_ms(self.config.display_settle_ms);
        display.write_line(0, &top);
        display.write_line(1, &bottom);
        debug!("Display refreshed: '{}' / '{}'", top, bottom);
    }
}
