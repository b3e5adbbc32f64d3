//! Display sink adapters.
//!
//! - [`NullDisplay`] for variants without a display.
//! - [`ConsoleDisplay`] mirrors a 2-row character LCD into memory and logs
//!   each rewrite, for the host runner.

use log::{debug, info};

use crate::app::ports::DisplaySink;
use crate::app::service::DisplayLine;

pub const DISPLAY_ROWS: usize = 2;

/// Discards every call.
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn clear(&mut self) {}

    fn write_line(&mut self, _row: u8, _text: &str) {}
}

#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    rows: [DisplayLine; DISPLAY_ROWS],
    refreshes: u32,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[DisplayLine; DISPLAY_ROWS] {
        &self.rows
    }

    /// Number of clears seen so far.
    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }
}

impl DisplaySink for ConsoleDisplay {
    fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
        self.refreshes += 1;
    }

    fn write_line(&mut self, row: u8, text: &str) {
        let Some(slot) = self.rows.get_mut(usize::from(row)) else {
            debug!("LCD row {} out of range, dropped", row);
            return;
        };
        slot.clear();
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
        info!("LCD[{}] {}", row, slot);
    }
}
