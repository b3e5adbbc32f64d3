//! Port traits: the hexagonal boundary between the control loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensor bus, actuator, report sink, display, config
//! storage) implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the loop never touches hardware directly.
//! The inter-cycle delay uses [`embedded_hal::delay::DelayNs`] rather than
//! a port of its own.

use crate::config::LoopConfig;
use crate::error::{ActuatorError, SensorError};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: thermocouple driver → domain)
// ───────────────────────────────────────────────────────────────

/// Thermocouple converter behind a serial bus.
///
/// Frame decoding and cold-junction compensation belong to the implementor.
/// [`read`](Self::read) latches one conversion; the accessors return values
/// from that latched conversion.
pub trait SensorPort {
    /// Bring the bus and converter up.
    fn begin(&mut self) -> Result<(), SensorError>;

    /// Set the bus clock in Hz.
    fn set_bus_speed(&mut self, hz: u32);

    /// Perform one read and return its status code (see [`super::status`]).
    fn read(&mut self) -> i32;

    /// Thermocouple temperature of the last read (C).
    fn temperature_c(&self) -> f32;

    /// Cold-junction reference temperature of the last read (C).
    fn internal_reference_c(&self) -> f32;

    /// Undecoded 32-bit frame of the last read.
    fn raw_frame(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → fan / LED)
// ───────────────────────────────────────────────────────────────

/// Single proportional output channel.
pub trait ActuatorPort {
    /// Drive the output; `0` is off, `255` full scale.
    fn set_output(&mut self, command: u8) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Report sink port (driven adapter: domain → serial console)
// ───────────────────────────────────────────────────────────────

/// The loop emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide how they are rendered.
pub trait ReportSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Display sink port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Two-row character display.
pub trait DisplaySink {
    fn clear(&mut self);

    /// Write `text` starting at column 0 of `row` (0 or 1).
    fn write_line(&mut self, row: u8, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists loop configuration.
///
/// Implementations MUST validate before persisting and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping.
pub trait ConfigPort {
    /// Load configuration. Returns [`ConfigError::NotFound`] when nothing is stored.
    fn load(&self) -> Result<LoopConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &LoopConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config failed to deserialize.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::error::Error for ConfigError {}
