//! Sensor status-code classification.
//!
//! The sensor driver reports one integer per read. Known codes:
//!
//! | Code | Category          | Class                  |
//! |------|-------------------|------------------------|
//! | 0    | `Ok`              | -                      |
//! | 1    | `OpenCircuit`     | `SensorFault`          |
//! | 2    | `ShortToGround`   | `SensorFault`          |
//! | 4    | `ShortToVcc`      | `SensorFault`          |
//! | 7    | `GenericError`    | `SensorFault`          |
//! | 128  | `NoReadYet`       | `SensorFault`          |
//! | 129  | `NoCommunication` | `CommunicationFailure` |
//! | else | `Unknown`         | `UnknownCode`          |
//!
//! Only `CommunicationFailure` aborts a cycle. Sensor faults and unknown
//! codes are reported and the temperature is still converted and processed.

use core::fmt;

pub const STATUS_OK: i32 = 0;
pub const STATUS_OPEN_CIRCUIT: i32 = 1;
pub const STATUS_SHORT_TO_GND: i32 = 2;
pub const STATUS_SHORT_TO_VCC: i32 = 4;
pub const STATUS_GENERIC_ERROR: i32 = 7;
pub const STATUS_NO_READ: i32 = 128;
pub const STATUS_NO_COMMUNICATION: i32 = 129;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Ok,
    OpenCircuit,
    ShortToGround,
    ShortToVcc,
    GenericError,
    NoReadYet,
    NoCommunication,
    Unknown,
}

/// How the loop driver treats a non-OK status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultClass {
    /// Bus unresponsive: skip the state update this cycle.
    CommunicationFailure,
    /// Thermocouple wiring fault: logged, reading still processed.
    SensorFault,
    /// Unrecognised code: logged, treated like a sensor fault.
    UnknownCode,
}

/// Map a raw status code to its category. Total over every `i32`.
pub fn classify(code: i32) -> StatusCategory {
    match code {
        STATUS_OK => StatusCategory::Ok,
        STATUS_OPEN_CIRCUIT => StatusCategory::OpenCircuit,
        STATUS_SHORT_TO_GND => StatusCategory::ShortToGround,
        STATUS_SHORT_TO_VCC => StatusCategory::ShortToVcc,
        STATUS_GENERIC_ERROR => StatusCategory::GenericError,
        STATUS_NO_READ => StatusCategory::NoReadYet,
        STATUS_NO_COMMUNICATION => StatusCategory::NoCommunication,
        _ => StatusCategory::Unknown,
    }
}

impl StatusCategory {
    /// Canonical code for the category; `None` for `Unknown`.
    pub fn code(self) -> Option<i32> {
        match self {
            Self::Ok => Some(STATUS_OK),
            Self::OpenCircuit => Some(STATUS_OPEN_CIRCUIT),
            Self::ShortToGround => Some(STATUS_SHORT_TO_GND),
            Self::ShortToVcc => Some(STATUS_SHORT_TO_VCC),
            Self::GenericError => Some(STATUS_GENERIC_ERROR),
            Self::NoReadYet => Some(STATUS_NO_READ),
            Self::NoCommunication => Some(STATUS_NO_COMMUNICATION),
            Self::Unknown => None,
        }
    }

    /// Operator-facing text for the serial console.
    pub fn message(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::OpenCircuit => "Thermocouple open circuit - check wiring",
            Self::ShortToGround => "Thermocouple short to GND - check wiring",
            Self::ShortToVcc => "Thermocouple short to VCC - check wiring",
            Self::GenericError => "Generic error",
            Self::NoReadYet => "No read done yet - check wiring",
            Self::NoCommunication => "No communication - check wiring",
            Self::Unknown => "Unknown status code",
        }
    }

    pub fn fault_class(self) -> Option<FaultClass> {
        match self {
            Self::Ok => None,
            Self::NoCommunication => Some(FaultClass::CommunicationFailure),
            Self::Unknown => Some(FaultClass::UnknownCode),
            Self::OpenCircuit
            | Self::ShortToGround
            | Self::ShortToVcc
            | Self::GenericError
            | Self::NoReadYet => Some(FaultClass::SensorFault),
        }
    }

    /// True when the cycle must skip filter and extrema updates.
    pub fn aborts_cycle(self) -> bool {
        self.fault_class() == Some(FaultClass::CommunicationFailure)
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
