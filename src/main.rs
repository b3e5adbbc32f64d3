//! Thermoloop host runner.
//!
//! Drives the control loop against a scripted thermocouple and an
//! in-memory PWM channel, printing the serial console through `log`.
//!
//! ```text
//! thermoloop [CONFIG.json] [CYCLES]
//! ```
//!
//! Without a config file the telemetry defaults are used. Without a cycle
//! count the loop runs until interrupted, like the board does.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SimulatedThermocouple ─┐                                │
//! │                         ├─ HardwareAdapter ─▶ AppService │
//! │  PwmActuator(HostPwm) ──┘        ▲                       │
//! │                                  │                       │
//! │  CycleScheduler ── HostDelay ────┘  ─▶ LogReportSink      │
//! │                                     ─▶ Console/NullDisplay│
//! └──────────────────────────────────────────────────────────┘
//! ```

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};

use thermoloop::adapters::config_file::JsonConfigStore;
use thermoloop::adapters::display::{ConsoleDisplay, NullDisplay};
use thermoloop::adapters::hardware::HardwareAdapter;
use thermoloop::adapters::log_sink::LogReportSink;
use thermoloop::adapters::sim_sensor::SimulatedThermocouple;
use thermoloop::adapters::time::HostDelay;
use thermoloop::app::ports::{ConfigError, ConfigPort};
use thermoloop::app::service::AppService;
use thermoloop::config::LoopConfig;
use thermoloop::drivers::pwm_output::{HostPwmChannel, PwmActuator};
use thermoloop::scheduler::CycleScheduler;

/// 8-bit output, as on the original LED/fan pin.
const PWM_MAX_DUTY: u16 = 255;

fn load_config(path: Option<&str>) -> Result<LoopConfig> {
    let Some(path) = path else {
        return Ok(LoopConfig::default());
    };
    let store = JsonConfigStore::new(path);
    match store.load() {
        Ok(cfg) => Ok(cfg),
        Err(ConfigError::NotFound) => {
            warn!("{} not found, writing defaults there", path);
            let cfg = LoopConfig::default();
            store.save(&cfg)?;
            Ok(cfg)
        }
        Err(e) => Err(e).with_context(|| format!("loading {}", path)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    info!("Thermoloop v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let max_cycles = args
        .get(1)
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("CYCLES must be a non-negative integer")?;

    let mut hw = HardwareAdapter::new(
        SimulatedThermocouple::warm_up_profile(),
        PwmActuator::new(HostPwmChannel::new(PWM_MAX_DUTY)),
    );
    let mut sink = LogReportSink::new();
    let mut delay = HostDelay::new();
    let scheduler = CycleScheduler::new(config.cycle_period_ms);
    let has_display = config.variant.has_display();

    let mut app = AppService::new(config);
    app.start(&mut hw, &mut sink, &mut delay)?;

    let summary = if has_display {
        let mut display = ConsoleDisplay::new();
        scheduler.run(&mut app, &mut hw, &mut sink, &mut display, &mut delay, max_cycles)
    } else {
        scheduler.run(&mut app, &mut hw, &mut sink, &mut NullDisplay, &mut delay, max_cycles)
    };

    info!(
        "Done: {} cycles, {} without sensor, final output {}",
        summary.cycles,
        summary.faulted,
        hw.actuator().command()
    );
    Ok(())
}
