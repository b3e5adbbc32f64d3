//! Linear threshold mapping from filtered temperature to actuator command.
//!
//! ```text
//! command = clamp((average - offset) * multiplier, 0, 255)
//! ```

pub const DEFAULT_OFFSET_C: i32 = 30;
pub const DEFAULT_MULTIPLIER: i32 = 2;

/// Full-scale actuator command.
pub const COMMAND_MAX: u8 = u8::MAX;

/// Map a filtered temperature onto the `[0, 255]` output range.
pub fn map_to_command(average_c: i32, offset_c: i32, multiplier: i32) -> u8 {
    let raw = (i64::from(average_c) - i64::from(offset_c)) * i64::from(multiplier);
    raw.clamp(0, i64::from(COMMAND_MAX)) as u8
}

/// The two mapping constants, carried together from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorMapping {
    pub offset_c: i32,
    pub multiplier: i32,
}

impl Default for ActuatorMapping {
    fn default() -> Self {
        Self {
            offset_c: DEFAULT_OFFSET_C,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl ActuatorMapping {
    pub fn command(&self, average_c: i32) -> u8 {
        map_to_command(average_c, self.offset_c, self.multiplier)
    }
}
