//! Integration tests: AppService → detector → alert output.

use proxsentry::app::events::AppEvent;
use proxsentry::app::ports::{AlertPort, EventSink, SensorPort};
use proxsentry::app::service::AppService;
use proxsentry::config::SystemConfig;
use proxsentry::detector::DetectionState;
use proxsentry::sensors::ultrasonic::{CM_TO_INCH, DistanceReading};

// ── Mock implementations ──────────────────────────────────────

fn reading(cm: f32) -> DistanceReading {
    DistanceReading {
        cm,
        inches: cm * CM_TO_INCH,
        raw_us: heapless::Vec::new(),
    }
}

struct MockHw {
    distances: Vec<f32>,
    next: usize,
    alert_calls: Vec<bool>,
    alert_on: bool,
}

impl MockHw {
    fn new(distances: &[f32]) -> Self {
        Self {
            distances: distances.to_vec(),
            next: 0,
            alert_calls: Vec::new(),
            alert_on: false,
        }
    }
}

impl SensorPort for MockHw {
    fn sample_distance(&mut self) -> DistanceReading {
        let cm = self.distances[self.next];
        self.next += 1;
        reading(cm)
    }
}

impl AlertPort for MockHw {
    fn set_alert(&mut self, on: bool) {
        self.alert_calls.push(on);
        self.alert_on = on;
    }

    fn is_alert_on(&self) -> bool {
        self.alert_on
    }
}

struct LogSink {
    events: Vec<String>,
}

impl LogSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, e: &AppEvent) {
        self.events.push(format!("{:?}", e));
    }
}

fn make_app(distances: &[f32]) -> (AppService, MockHw, LogSink) {
    let mut app = AppService::new(&SystemConfig::default());
    let mut hw = MockHw::new(distances);
    let mut sink = LogSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

// ── Startup behaviour ─────────────────────────────────────────

#[test]
fn start_forces_alert_off_and_emits_ready() {
    let (app, hw, sink) = make_app(&[]);
    assert_eq!(app.state(), DetectionState::Clear);
    assert_eq!(hw.alert_calls, vec![false], "alert must be forced inactive");
    assert!(sink.events.iter().any(|e| e.contains("Ready")));
}

// ── End-to-end scenario from the field report ─────────────────

#[test]
fn approach_and_retreat_scenario() {
    let (mut app, mut hw, mut sink) = make_app(&[10.0, 5.0, 4.0, 9.0]);
    let expected = [
        DetectionState::Clear,
        DetectionState::Alerting,
        DetectionState::Alerting,
        DetectionState::Clear,
    ];

    for want in expected {
        app.tick(&mut hw, &mut sink);
        assert_eq!(app.state(), want);
    }

    // Startup off, alert on entering the zone, off when leaving it —
    // and nothing in between (no re-commands while the state holds).
    assert_eq!(hw.alert_calls, vec![false, true, false]);
    assert_eq!(app.tick_count(), 4);
}

// ── Per-cycle reporting ───────────────────────────────────────

#[test]
fn every_tick_emits_a_distance_event() {
    let (mut app, mut hw, mut sink) = make_app(&[12.0, 7.0, 3.0]);
    for _ in 0..3 {
        app.tick(&mut hw, &mut sink);
    }
    let distance_events = sink
        .events
        .iter()
        .filter(|e| e.contains("Distance"))
        .count();
    assert_eq!(distance_events, 3);
}

#[test]
fn transitions_emit_state_changed_events() {
    let (mut app, mut hw, mut sink) = make_app(&[5.0, 9.0]);
    app.tick(&mut hw, &mut sink);
    app.tick(&mut hw, &mut sink);
    let transitions: Vec<&String> = sink
        .events
        .iter()
        .filter(|e| e.contains("StateChanged"))
        .collect();
    assert_eq!(transitions.len(), 2);
    assert!(transitions[0].contains("Alerting"));
    assert!(transitions[1].contains("Clear"));
}

// ── Dead band and degenerate readings ─────────────────────────

#[test]
fn dead_band_readings_never_touch_the_alert_output() {
    let (mut app, mut hw, mut sink) = make_app(&[7.0; 20]);
    for _ in 0..20 {
        app.tick(&mut hw, &mut sink);
    }
    assert_eq!(app.state(), DetectionState::Clear);
    // Only the startup force-off.
    assert_eq!(hw.alert_calls, vec![false]);
}

#[test]
fn all_timeout_zero_reading_does_not_alert() {
    let (mut app, mut hw, mut sink) = make_app(&[0.0; 5]);
    for _ in 0..5 {
        app.tick(&mut hw, &mut sink);
    }
    assert_eq!(app.state(), DetectionState::Clear);
    assert!(!hw.is_alert_on());
}

#[test]
fn lost_echo_while_alerting_keeps_the_alarm_on() {
    let (mut app, mut hw, mut sink) = make_app(&[4.0, 0.0, 0.0, 9.0]);
    app.tick(&mut hw, &mut sink);
    assert!(app.is_alerting());
    app.tick(&mut hw, &mut sink);
    app.tick(&mut hw, &mut sink);
    assert!(app.is_alerting(), "zero reading must not silence the alarm");
    assert!(hw.is_alert_on());
    app.tick(&mut hw, &mut sink);
    assert!(!app.is_alerting());
    assert!(!hw.is_alert_on());
}

// ── Boundary strictness through the full stack ────────────────

#[test]
fn threshold_boundaries_are_strict() {
    let (mut app, mut hw, mut sink) = make_app(&[6.0, 5.9, 8.0, 8.1]);

    app.tick(&mut hw, &mut sink);
    assert_eq!(app.state(), DetectionState::Clear, "6.0 must not enter");

    app.tick(&mut hw, &mut sink);
    assert_eq!(app.state(), DetectionState::Alerting);

    app.tick(&mut hw, &mut sink);
    assert_eq!(app.state(), DetectionState::Alerting, "8.0 must not exit");

    app.tick(&mut hw, &mut sink);
    assert_eq!(app.state(), DetectionState::Clear);
}
