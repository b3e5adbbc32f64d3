//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements           | Connects to                  |
//! |----------------|----------------------|------------------------------|
//! | `config_file`  | ConfigPort           | JSON file on disk            |
//! | `display`      | DisplaySink          | 2-row LCD mirror / nothing   |
//! | `hardware`     | SensorPort           | any SensorPort               |
//! |                | ActuatorPort         | any ActuatorPort             |
//! | `log_sink`     | ReportSink           | `log` facade (serial console)|
//! | `sim_sensor`   | SensorPort           | scripted readings            |
//! | `time`         | DelayNs              | `std::thread::sleep`         |

pub mod config_file;
pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod sim_sensor;
pub mod time;
