//! Mock hardware adapters for integration tests.
//!
//! Records every port call so tests can assert on the full history
//! without touching real ADC/LEDC registers or sleeping.

use comonitor::app::events::AppEvent;
use comonitor::app::ports::{EventSink, GasSensorPort, IndicatorPort};
use comonitor::sensors::RegressionMethod;
use embedded_hal::delay::DelayNs;

// ── Gas sensor call record ────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SensorCall {
    Init,
    Update,
    Calibrate(f32),
    SetR0(f32),
    SetRegressionMethod(RegressionMethod),
    SetA(f32),
    SetB(f32),
    ReadSensor,
}

// ── MockSensor ────────────────────────────────────────────────

/// Driver stub: every calibration sample yields `contribution`, every
/// reading yields `ppm`.
pub struct MockSensor {
    pub contribution: f32,
    pub ppm: f32,
    pub calls: Vec<SensorCall>,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn new(contribution: f32, ppm: f32) -> Self {
        Self {
            contribution,
            ppm,
            calls: Vec::new(),
        }
    }

    pub fn count(&self, call: &SensorCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn reads(&self) -> usize {
        self.count(&SensorCall::ReadSensor)
    }

    pub fn installed_r0(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            SensorCall::SetR0(r0) => Some(*r0),
            _ => None,
        })
    }
}

impl GasSensorPort for MockSensor {
    fn init(&mut self) {
        self.calls.push(SensorCall::Init);
    }

    fn update(&mut self) {
        self.calls.push(SensorCall::Update);
    }

    fn calibrate(&mut self, clean_air_ratio: f32) -> f32 {
        self.calls.push(SensorCall::Calibrate(clean_air_ratio));
        self.contribution
    }

    fn set_r0(&mut self, r0: f32) {
        self.calls.push(SensorCall::SetR0(r0));
    }

    fn set_regression_method(&mut self, method: RegressionMethod) {
        self.calls.push(SensorCall::SetRegressionMethod(method));
    }

    fn set_a(&mut self, a: f32) {
        self.calls.push(SensorCall::SetA(a));
    }

    fn set_b(&mut self, b: f32) {
        self.calls.push(SensorCall::SetB(b));
    }

    fn read_sensor(&mut self) -> f32 {
        self.calls.push(SensorCall::ReadSensor);
        self.ppm
    }
}

// ── MockLed ───────────────────────────────────────────────────

pub struct MockLed {
    pub levels: Vec<u8>,
}

#[allow(dead_code)]
impl MockLed {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    pub fn last_level(&self) -> Option<u8> {
        self.levels.last().copied()
    }
}

impl IndicatorPort for MockLed {
    fn set_level(&mut self, level: u8) {
        self.levels.push(level);
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records requested waits instead of sleeping.
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn new() -> Self {
        Self { waits_ms: Vec::new() }
    }

    pub fn total_ms(&self) -> u64 {
        self.waits_ms.iter().map(|&ms| u64::from(ms)).sum()
    }

    pub fn clear(&mut self) {
        self.waits_ms.clear();
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── EventLog ──────────────────────────────────────────────────

pub struct EventLog {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count_ready(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Ready))
            .count()
    }

    pub fn readings(&self) -> Vec<comonitor::app::events::Reading> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Reading(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
