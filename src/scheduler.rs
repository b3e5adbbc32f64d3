//! Fixed-period cycle scheduler.
//!
//! The loop has no overlapping work, so scheduling is a blocking delay
//! between back-to-back ticks:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  tick ─▶ delay(period) ─▶ tick ─▶ delay ...│
//! └────────────────────────────────────────────┘
//! ```
//!
//! The period is counted from the end of one tick, not from its start,
//! so the effective rate is `period + tick duration`.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::app::ports::{ActuatorPort, DisplaySink, ReportSink, SensorPort};
use crate::app::service::AppService;
use crate::control::CycleOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleScheduler {
    period_ms: u32,
}

/// Counters accumulated over one [`CycleScheduler::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub cycles: u64,
    pub faulted: u64,
}

impl CycleScheduler {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Tick `service` every period.
    ///
    /// `max_cycles = None` runs until the process is reset. Communication
    /// failures never end the run; they are retried on the next cycle.
    pub fn run(
        &self,
        service: &mut AppService,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl ReportSink,
        display: &mut impl DisplaySink,
        delay: &mut impl DelayNs,
        max_cycles: Option<u64>,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        while max_cycles.is_none_or(|max| summary.cycles < max) {
            if service.tick(hw, sink, display, delay) == CycleOutcome::Faulted {
                summary.faulted += 1;
            }
            summary.cycles += 1;
            delay.delay_ms(self.period_ms);
        }
        info!(
            "Scheduler stopped after {} cycles ({} faulted)",
            summary.cycles, summary.faulted
        );
        summary
    }
}
