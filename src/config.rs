//! Loop configuration parameters
//!
//! All tunable constants for the thermocouple control loop. The firmware
//! sketch these come from treated them as compile-time constants; here
//! they live in one serde-backed struct so the host runner can load them
//! from a JSON file through [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::control::actuator::ActuatorMapping;

/// Which of the three loop flavours to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Serial telemetry only.
    Telemetry,
    /// Telemetry plus a two-line status display.
    Display,
    /// Telemetry plus raw frame and internal reference temperature.
    Diagnostic,
}

impl Variant {
    pub fn has_display(self) -> bool {
        matches!(self, Self::Display)
    }

    pub fn reports_raw_frame(self) -> bool {
        matches!(self, Self::Diagnostic)
    }

    /// Cycle period the variant was tuned for (milliseconds).
    pub fn default_cycle_period_ms(self) -> u32 {
        match self {
            Self::Telemetry | Self::Diagnostic => 1000,
            Self::Display => 2000,
        }
    }
}

/// Core loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    pub variant: Variant,

    // --- Bus ---
    /// Sensor bus clock (Hz)
    pub bus_speed_hz: u32,

    // --- Timing ---
    /// Delay between the end of one cycle and the start of the next (ms)
    pub cycle_period_ms: u32,
    /// One-off wait after bus bring-up before the first poll (ms)
    pub startup_delay_ms: u32,
    /// Settle time after clearing the display before rewriting it (ms)
    pub display_settle_ms: u32,

    // --- Filter ---
    /// Recursive average window `N`; `1` disables smoothing.
    pub filter_window: u16,

    // --- Actuator mapping ---
    /// Temperature (C) at which the output starts to rise
    pub actuator_offset_c: i32,
    /// Output counts per degree above the offset
    pub actuator_multiplier: i32,
    /// Absolute temperature ceiling (C). Logged when exceeded, never applied
    /// to the output mapping.
    pub temp_ceiling_c: i32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Telemetry)
    }
}

impl LoopConfig {
    /// Defaults for a given variant (only the cycle period differs).
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            bus_speed_hz: 1_000_000, // 1 MHz
            cycle_period_ms: variant.default_cycle_period_ms(),
            startup_delay_ms: 3000,
            display_settle_ms: 10,
            filter_window: 2,
            actuator_offset_c: 30,
            actuator_multiplier: 2,
            temp_ceiling_c: 60,
        }
    }

    pub fn mapping(&self) -> ActuatorMapping {
        ActuatorMapping {
            offset_c: self.actuator_offset_c,
            multiplier: self.actuator_multiplier,
        }
    }

    /// Range-check every field that could wedge the loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter_window == 0 {
            return Err(ConfigError::ValidationFailed("filter_window must be >= 1"));
        }
        if self.cycle_period_ms == 0 {
            return Err(ConfigError::ValidationFailed("cycle_period_ms must be > 0"));
        }
        if self.bus_speed_hz == 0 {
            return Err(ConfigError::ValidationFailed("bus_speed_hz must be > 0"));
        }
        if self.actuator_multiplier < 0 {
            return Err(ConfigError::ValidationFailed(
                "actuator_multiplier must not be negative",
            ));
        }
        Ok(())
    }
}
