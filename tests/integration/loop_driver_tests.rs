//! Integration tests for the AppService poll → filter → map → report cycle.

use super::mock_hw::{DisplayCall, LogSink, MockDelay, MockHardware, RecordingDisplay};

use thermoloop::app::events::AppEvent;
use thermoloop::app::service::AppService;
use thermoloop::app::status::StatusCategory;
use thermoloop::config::{LoopConfig, Variant};
use thermoloop::control::CycleOutcome;
use thermoloop::error::{Error, SensorError};

struct Rig {
    app: AppService,
    hw: MockHardware,
    sink: LogSink,
    display: RecordingDisplay,
    delay: MockDelay,
}

impl Rig {
    fn new(config: LoopConfig) -> Self {
        let mut rig = Self {
            app: AppService::new(config),
            hw: MockHardware::new(),
            sink: LogSink::new(),
            display: RecordingDisplay::new(),
            delay: MockDelay::new(),
        };
        rig.app
            .start(&mut rig.hw, &mut rig.sink, &mut rig.delay)
            .unwrap();
        rig.delay.delays_ms.clear();
        rig
    }

    fn tick(&mut self) -> CycleOutcome {
        self.app
            .tick(&mut self.hw, &mut self.sink, &mut self.display, &mut self.delay)
    }
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_brings_bus_up_and_waits() {
    let mut app = AppService::new(LoopConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    let mut delay = MockDelay::new();

    app.start(&mut hw, &mut sink, &mut delay).unwrap();

    assert!(hw.begun);
    assert_eq!(hw.bus_speed_hz, Some(1_000_000));
    assert_eq!(delay.delays_ms, vec![3000]);
    assert!(matches!(
        sink.events.as_slice(),
        [AppEvent::Started {
            variant: Variant::Telemetry,
            bus_speed_hz: 1_000_000
        }]
    ));
}

#[test]
fn start_propagates_bus_failure() {
    let mut app = AppService::new(LoopConfig::default());
    let mut hw = MockHardware::new();
    hw.fail_begin = true;
    let result = app.start(&mut hw, &mut LogSink::new(), &mut MockDelay::new());
    assert_eq!(result, Err(Error::Sensor(SensorError::BusInitFailed)));
}

// ── Nominal cycles ────────────────────────────────────────────

#[test]
fn two_samples_average_with_truncation() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(0, 99.6).push(0, 101.2);

    assert_eq!(rig.tick(), CycleOutcome::Nominal);
    assert_eq!(rig.app.state().average_c(), 100);
    assert_eq!(rig.tick(), CycleOutcome::Nominal);
    assert_eq!(rig.app.state().average_c(), 100);

    let r = rig.sink.last_report().unwrap();
    assert_eq!((r.min_c, r.max_c), (100, 100));
    assert_eq!(r.command, 140);
    assert_eq!(rig.hw.outputs, vec![140, 140]);
}

#[test]
fn output_follows_mapping_thresholds() {
    let mut rig = Rig::new(LoopConfig {
        filter_window: 1,
        ..Default::default()
    });
    for t in [29.0, 30.0, 31.0, 160.0] {
        rig.hw.push(0, t);
    }
    for _ in 0..4 {
        rig.tick();
    }
    assert_eq!(rig.hw.outputs, vec![0, 0, 2, 255]);
}

#[test]
fn sensor_fault_is_reported_and_processed() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(1, 45.0);

    assert_eq!(rig.tick(), CycleOutcome::Nominal);
    assert!(rig.app.state().filter.initialized);
    assert_eq!(rig.app.state().average_c(), 45);

    let r = rig.sink.last_report().unwrap();
    assert_eq!(r.status, StatusCategory::OpenCircuit);
    assert_eq!(r.temperature_c, Some(45.0));
}

#[test]
fn unknown_code_keeps_raw_value_in_report() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(999, 40.0);

    assert_eq!(rig.tick(), CycleOutcome::Nominal);
    let r = rig.sink.last_report().unwrap();
    assert_eq!(r.status, StatusCategory::Unknown);
    assert_eq!(r.status_code, 999);
}

// ── Communication failure ─────────────────────────────────────

#[test]
fn communication_failure_freezes_state_but_drives_output() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(0, 50.0).push(129, 90.0);

    rig.tick();
    let before = *rig.app.state();
    let reads_before = rig.hw.outputs.len();

    assert_eq!(rig.tick(), CycleOutcome::Faulted);
    assert_eq!(*rig.app.state(), before);
    assert_eq!(rig.hw.outputs.len(), reads_before + 1);
    assert_eq!(rig.hw.last_output(), Some(40));

    let r = rig.sink.last_report().unwrap();
    assert_eq!(r.outcome, CycleOutcome::Faulted);
    assert_eq!(r.status, StatusCategory::NoCommunication);
    assert_eq!(r.temperature_c, None);
    assert_eq!(r.average_c, 50);
}

#[test]
fn communication_failure_before_first_reading_outputs_zero() {
    let mut rig = Rig::new(LoopConfig::default());
    assert_eq!(rig.tick(), CycleOutcome::Faulted);
    assert!(!rig.app.state().filter.initialized);
    assert_eq!(rig.hw.outputs, vec![0]);
}

#[test]
fn actuator_failure_does_not_stop_the_loop() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.fail_output = true;
    rig.hw.push(0, 80.0).push(0, 80.0);

    assert_eq!(rig.tick(), CycleOutcome::Nominal);
    assert_eq!(rig.tick(), CycleOutcome::Nominal);
    assert_eq!(rig.app.cycle_count(), 2);
    assert_eq!(rig.app.last_command(), 100);
    assert!(rig.hw.outputs.is_empty());
}

// ── Variants ──────────────────────────────────────────────────

#[test]
fn display_refreshes_only_on_change() {
    let mut rig = Rig::new(LoopConfig::for_variant(Variant::Display));
    rig.hw.push(0, 40.0).push(0, 40.3).push(0, 44.0);

    rig.tick();
    assert_eq!(
        rig.display.calls,
        vec![
            DisplayCall::Clear,
            DisplayCall::Line(0, "Temp: 40 C".into()),
            DisplayCall::Line(1, "Min:40 Max:40".into()),
        ]
    );
    assert_eq!(rig.delay.delays_ms, vec![10]);
    assert!(!rig.app.state().changed());

    rig.display.calls.clear();
    rig.tick();
    assert!(rig.display.calls.is_empty(), "unchanged cycle must not redraw");

    rig.tick();
    assert_eq!(
        rig.display.calls,
        vec![
            DisplayCall::Clear,
            DisplayCall::Line(0, "Temp: 42 C".into()),
            DisplayCall::Line(1, "Min:40 Max:42".into()),
        ]
    );
}

#[test]
fn telemetry_variant_never_touches_display() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(0, 40.0).push(0, 60.0);
    rig.tick();
    rig.tick();
    assert!(rig.display.calls.is_empty());
    assert!(rig.delay.delays_ms.is_empty());
}

#[test]
fn diagnostic_variant_reports_raw_frame() {
    let mut rig = Rig::new(LoopConfig::for_variant(Variant::Diagnostic));
    rig.hw.push(0, 30.0);
    rig.tick();

    let r = rig.sink.last_report().unwrap();
    assert_eq!(r.raw_frame, Some(0xDEAD_BEEF));
    assert_eq!(r.internal_c, Some(24.5));
}

#[test]
fn telemetry_variant_skips_raw_frame() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(0, 30.0);
    rig.tick();

    let r = rig.sink.last_report().unwrap();
    assert_eq!(r.raw_frame, None);
    assert_eq!(r.internal_c, None);
}

#[test]
fn reports_are_numbered() {
    let mut rig = Rig::new(LoopConfig::default());
    rig.hw.push(0, 30.0);
    rig.tick();
    rig.tick();
    let cycles: Vec<u64> = rig.sink.reports().iter().map(|r| r.cycle).collect();
    assert_eq!(cycles, vec![1, 2]);
}
