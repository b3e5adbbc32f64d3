//! Log-based report sink adapter.
//!
//! Implements [`ReportSink`] by writing one block of console lines per
//! cycle through the `log` facade (stderr via `env_logger` on the host,
//! UART on a board).

use log::{info, warn};

use crate::app::events::{AppEvent, CycleReport};
use crate::app::ports::ReportSink;
use crate::app::status::StatusCategory;
use crate::control::CycleOutcome;

/// 32 bits in groups of four, MSB first: `"1010 0000 ... 0001"`.
pub type FrameBits = heapless::String<39>;

/// Render a raw frame the way a bench engineer reads it off a scope.
pub fn format_raw_frame(raw: u32) -> FrameBits {
    let mut out = FrameBits::new();
    for i in 0..32 {
        if i > 0 && i % 4 == 0 {
            let _ = out.push(' ');
        }
        let bit = raw & (0x8000_0000 >> i) != 0;
        let _ = out.push(if bit { '1' } else { '0' });
    }
    out
}

pub struct LogReportSink;

impl LogReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogReportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for LogReportSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                variant,
                bus_speed_hz,
            } => {
                info!("START | variant={:?} bus={}Hz", variant, bus_speed_hz);
            }
            AppEvent::Cycle(r) if r.outcome == CycleOutcome::Faulted => {
                warn!(
                    "NO COMMUNICATION | cycle={} | avg={}\u{00b0}C (held) | cmd={}",
                    r.cycle, r.average_c, r.command
                );
            }
            AppEvent::Cycle(r) => log_cycle(r),
        }
    }
}

fn log_cycle(r: &CycleReport) {
    if r.status == StatusCategory::Unknown {
        info!("stat:\t\t{} ({})", r.status, r.status_code);
    } else {
        info!("stat:\t\t{}", r.status);
    }
    if let Some(raw) = r.raw_frame {
        info!("raw:\t\t{}", format_raw_frame(raw));
    }
    if let Some(internal) = r.internal_c {
        info!("internal:\t{:.3}", internal);
    }
    if let Some(t) = r.temperature_c {
        info!("temperature:\t{:.3}", t);
    }
    info!(
        "CYCLE {} | avg={}\u{00b0}C | min/max={} - {} | cmd={}",
        r.cycle, r.average_c, r.min_c, r.max_c, r.command
    );
}
