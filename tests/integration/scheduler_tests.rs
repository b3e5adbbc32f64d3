//! Integration tests for the fixed-period cycle scheduler.

use super::mock_hw::{LogSink, MockDelay, MockHardware};

use thermoloop::adapters::display::NullDisplay;
use thermoloop::adapters::hardware::HardwareAdapter;
use thermoloop::adapters::sim_sensor::{SimReading, SimulatedThermocouple};
use thermoloop::app::service::AppService;
use thermoloop::config::{LoopConfig, Variant};
use thermoloop::drivers::pwm_output::{HostPwmChannel, PwmActuator};
use thermoloop::scheduler::CycleScheduler;

#[test]
fn bounded_run_sleeps_one_period_per_cycle() {
    let config = LoopConfig::default();
    let scheduler = CycleScheduler::new(config.cycle_period_ms);
    let mut app = AppService::new(config);
    let mut hw = MockHardware::new();
    hw.push(0, 35.0).push(0, 36.0).push(129, 0.0);
    let mut sink = LogSink::new();
    let mut delay = MockDelay::new();

    let summary = scheduler.run(
        &mut app,
        &mut hw,
        &mut sink,
        &mut NullDisplay,
        &mut delay,
        Some(3),
    );

    assert_eq!(summary.cycles, 3);
    assert_eq!(summary.faulted, 1);
    assert_eq!(delay.delays_ms, vec![1000, 1000, 1000]);
    assert_eq!(sink.reports().len(), 3);
    assert_eq!(app.cycle_count(), 3);
}

#[test]
fn zero_cycles_does_nothing() {
    let scheduler = CycleScheduler::new(500);
    let mut app = AppService::new(LoopConfig::default());
    let mut hw = MockHardware::new();
    let mut delay = MockDelay::new();

    let summary = scheduler.run(
        &mut app,
        &mut hw,
        &mut LogSink::new(),
        &mut NullDisplay,
        &mut delay,
        Some(0),
    );

    assert_eq!(summary.cycles, 0);
    assert!(delay.delays_ms.is_empty());
    assert!(hw.outputs.is_empty());
}

#[test]
fn simulated_board_ramps_output() {
    let config = LoopConfig::for_variant(Variant::Diagnostic);
    let scheduler = CycleScheduler::new(config.cycle_period_ms);
    let mut app = AppService::new(config);
    let mut hw = HardwareAdapter::new(
        SimulatedThermocouple::new(vec![
            SimReading::ok(20.0),
            SimReading::ok(60.0),
            SimReading::ok(100.0),
        ]),
        PwmActuator::new(HostPwmChannel::new(255)),
    );
    let mut sink = LogSink::new();
    let mut delay = MockDelay::new();

    app.start(&mut hw, &mut sink, &mut delay).unwrap();
    assert_eq!(hw.sensor().bus_speed_hz(), 1_000_000);

    scheduler.run(
        &mut app,
        &mut hw,
        &mut sink,
        &mut NullDisplay,
        &mut delay,
        Some(3),
    );

    // 20 -> (20+60)/2 = 40 -> (40+100)/2 = 70
    assert_eq!(app.state().average_c(), 70);
    assert_eq!(hw.actuator().command(), 80);
    assert_eq!(hw.actuator().channel().duty(), 80);
    let r = sink.last_report().unwrap();
    assert_eq!((r.min_c, r.max_c), (20, 70));
    assert!(r.raw_frame.is_some());
}
