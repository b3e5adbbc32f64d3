//! Host delay adapter.
//!
//! Implements [`DelayNs`] with `std::thread::sleep` so the scheduler's
//! blocking inter-cycle delay behaves the same on a workstation as on a
//! board HAL delay.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

#[derive(Debug, Default, Clone, Copy)]
pub struct HostDelay;

impl HostDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
