//! First-order recursive temperature filter.
//!
//! Integer-Celsius exponential average:
//!
//! ```text
//! avg' = (avg * (N - 1) + round(sample)) / N
//! ```
//!
//! The division truncates toward zero, so non-exact steps bias the running
//! value downward. Installed loops are tuned against that behaviour; keep it.

/// Round to the nearest whole degree, ties away from zero.
///
/// Non-finite samples collapse to `0` and out-of-range samples saturate,
/// matching Rust's float-to-int cast.
pub fn round_celsius(sample_c: f32) -> i32 {
    sample_c.round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Current filtered temperature (whole C).
    pub average_c: i32,
    /// Set by the first processed sample, never cleared afterwards.
    pub initialized: bool,
}

impl FilterState {
    /// Fold one instantaneous sample into the running average.
    ///
    /// The first sample seeds the average directly. `window` is `N`; a
    /// window of `0` is treated as `1` (no smoothing).
    pub fn update(self, sample_c: f32, window: u16) -> Self {
        let sample = round_celsius(sample_c);
        if !self.initialized {
            return Self {
                average_c: sample,
                initialized: true,
            };
        }

        let n = i64::from(window.max(1));
        let avg = (i64::from(self.average_c) * (n - 1) + i64::from(sample)) / n;
        Self {
            average_c: avg as i32,
            initialized: true,
        }
    }
}
