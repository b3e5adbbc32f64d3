//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`ReportSink`](super::ports::ReportSink) port. Adapters on the other
//! side decide what to do with them.

use crate::config::Variant;
use crate::control::CycleOutcome;

use super::status::StatusCategory;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Bus is up and the loop is about to start.
    Started { variant: Variant, bus_speed_hz: u32 },

    /// One report per cycle, faulted or not.
    Cycle(CycleReport),
}

/// Everything a console needs to print for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub cycle: u64,
    pub outcome: CycleOutcome,
    pub status: StatusCategory,
    /// Raw status code, kept for `Unknown` categories.
    pub status_code: i32,
    /// Instantaneous reading; `None` on a faulted cycle.
    pub temperature_c: Option<f32>,
    pub raw_frame: Option<u32>,
    pub internal_c: Option<f32>,
    /// Filtered temperature (stale on a faulted cycle).
    pub average_c: i32,
    pub min_c: i32,
    pub max_c: i32,
    pub command: u8,
}
