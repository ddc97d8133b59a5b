//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (gas sensor, indicator LED, report sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.  Board
//! timing goes through `embedded_hal::delay::DelayNs`.

use crate::sensors::RegressionMethod;

// ───────────────────────────────────────────────────────────────
// Gas sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Analog gas sensor driver: owns ADC sampling and the RS/R0 math.
pub trait GasSensorPort {
    /// Prepare the analog input.
    fn init(&mut self);

    /// Capture a fresh raw sample; later calls work on this sample.
    fn update(&mut self);

    /// Baseline contribution of the current sample, given the sensor's
    /// RS/R0 ratio in clean air.
    fn calibrate(&mut self, clean_air_ratio: f32) -> f32;

    /// Install the clean-air baseline used by [`read_sensor`](Self::read_sensor).
    fn set_r0(&mut self, r0: f32);

    fn set_regression_method(&mut self, method: RegressionMethod);

    fn set_a(&mut self, a: f32);

    fn set_b(&mut self, b: f32);

    /// Concentration (ppm) for the current sample.
    fn read_sensor(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Status indicator with a brightness level (0 = off, 255 = full).
/// Cosmetic only; the domain never reads it back.
pub trait IndicatorPort {
    fn set_level(&mut self, level: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → serial / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial console,
/// log backend, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
