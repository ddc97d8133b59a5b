//! Integration tests: warm-up gating → sampling → AQI / mg/m³ reporting.

use comonitor::adapters::serial::SerialReporter;
use comonitor::app::events::AppEvent;
use comonitor::app::service::AppService;
use comonitor::config::SystemConfig;
use comonitor::fsm::StateId;

use crate::mock_hw::{EventLog, MockDelay, MockLed, MockSensor};

fn short_warmup(warmup_ticks: u32) -> SystemConfig {
    SystemConfig {
        warmup_ticks,
        ..SystemConfig::default()
    }
}

/// Service calibrated against a stub whose baseline averages to 50.0.
fn calibrated(config: SystemConfig, ppm: f32) -> (AppService, MockSensor, MockLed, MockDelay) {
    let mut app = AppService::new(config);
    let mut sensor = MockSensor::new(50.0, ppm);
    let mut led = MockLed::new();
    let mut log = EventLog::new();
    app.calibrate(&mut sensor, &mut led, &mut log).unwrap();
    (app, sensor, led, MockDelay::new())
}

#[test]
fn end_to_end_reports_ppm_aqi_and_mass_concentration() {
    let (mut app, mut sensor, mut led, mut delay) = calibrated(short_warmup(1), 9.4);
    assert_eq!(sensor.installed_r0(), Some(50.0));

    let mut reporter = SerialReporter::new(Vec::new());
    let reading = app
        .cycle(&mut sensor, &mut led, &mut delay, &mut reporter)
        .unwrap();

    assert_eq!(reading.aqi, 100);
    assert!((reading.mg_per_m3 - 10.7687).abs() < 1e-3);
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        out,
        "Ready\nPPM Value: 9.40\nAQI Value: 100\nCO Concentration (mg/m³): 10.77\n"
    );
}

#[test]
fn ready_fires_exactly_once_on_last_warmup_tick() {
    let n = 4;
    let (mut app, mut sensor, mut led, mut delay) = calibrated(short_warmup(n), 2.0);
    let mut log = EventLog::new();

    for cycle in 0..10 {
        let before = log.count_ready();
        app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
        let fired = log.count_ready() - before;
        if cycle == n - 1 {
            assert_eq!(fired, 1, "ready must fire on tick {}", n - 1);
            assert_eq!(app.state(), StateId::Ready);
        } else {
            assert_eq!(fired, 0, "unexpected ready on cycle {cycle}");
        }
    }
    assert_eq!(log.count_ready(), 1);
    assert_eq!(led.levels.iter().filter(|&&l| l == 80).count(), 1);
    assert_eq!(led.last_level(), Some(80));
}

#[test]
fn warmup_readings_are_reported_and_flagged() {
    let n = 3;
    let (mut app, mut sensor, mut led, mut delay) = calibrated(short_warmup(n), 2.0);
    let mut log = EventLog::new();

    for _ in 0..5 {
        app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    }

    let flags: Vec<bool> = log.readings().iter().map(|r| r.warmed_up).collect();
    assert_eq!(flags, vec![false, false, true, true, true]);
    assert_eq!(sensor.reads(), 5);
}

#[test]
fn suppressed_warmup_readings_are_withheld_but_still_sampled() {
    let config = SystemConfig {
        warmup_ticks: 3,
        suppress_warmup_readings: true,
        ..SystemConfig::default()
    };
    let (mut app, mut sensor, mut led, mut delay) = calibrated(config, 2.0);
    let mut log = EventLog::new();

    for _ in 0..5 {
        app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    }

    assert_eq!(log.readings().len(), 3);
    assert!(log.readings().iter().all(|r| r.warmed_up));
    assert_eq!(sensor.reads(), 5);
}

#[test]
fn warming_cycle_waits_tick_then_interval() {
    let (mut app, mut sensor, mut led, mut delay) = calibrated(short_warmup(2), 1.0);
    let mut log = EventLog::new();

    app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    assert_eq!(delay.waits_ms, vec![1000, 500]);

    delay.clear();
    app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    assert_eq!(delay.waits_ms, vec![1000, 500]);

    // Ready: only the inter-sample pause remains.
    delay.clear();
    app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    assert_eq!(delay.waits_ms, vec![500]);
    assert_eq!(app.cycle_count(), 3);
}

#[test]
fn default_warmup_takes_180_ticks() {
    let (mut app, mut sensor, mut led, mut delay) = calibrated(SystemConfig::default(), 0.5);
    let mut log = EventLog::new();

    for _ in 0..179 {
        app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    }
    assert_eq!(app.state(), StateId::Warming);
    app.cycle(&mut sensor, &mut led, &mut delay, &mut log).unwrap();
    assert_eq!(app.state(), StateId::Ready);
    assert_eq!(log.count_ready(), 1);
    // 180 one-second ticks plus 180 half-second pauses.
    assert_eq!(delay.total_ms(), 180 * 1000 + 180 * 500);
    assert_eq!(delay.total_ms(), app.config().warmup_duration_ms());
}

#[test]
fn high_concentration_saturates_aqi() {
    let (mut app, mut sensor, mut led, mut delay) = calibrated(short_warmup(1), 750.0);
    let mut log = EventLog::new();

    let reading = app
        .cycle(&mut sensor, &mut led, &mut delay, &mut log)
        .unwrap();
    assert_eq!(reading.aqi, 500);
    assert!(matches!(log.events.last(), Some(AppEvent::Reading(r)) if r.aqi == 500));
}
