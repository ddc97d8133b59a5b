//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: print to the serial console, log, etc.

use crate::aqi::{ppm_to_aqi, ppm_to_mg_per_m3};
use crate::error::CalibrationFault;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Startup indicator sequence finished.
    Started,

    /// Baseline calibration is about to take `samples` samples.
    CalibrationStarted { samples: u8 },

    /// One calibration sample was taken (`index` counts from 1).
    CalibrationSample { index: u8, contribution: f32 },

    /// All samples taken; `r0` is the averaged baseline before validation.
    CalibrationFinished { r0: f32 },

    /// The baseline is unusable; the monitor halts.
    CalibrationFailed(CalibrationFault),

    /// Warm-up countdown elapsed; readings are now trustworthy.
    Ready,

    /// One sampling cycle's result.
    Reading(Reading),
}

/// A converted concentration reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub ppm: f32,
    pub aqi: u16,
    pub mg_per_m3: f32,
    /// `false` while the sensor is still in its warm-up countdown.
    pub warmed_up: bool,
}

impl Reading {
    pub fn from_ppm(ppm: f32, molecular_weight: f32, warmed_up: bool) -> Self {
        Self {
            ppm,
            aqi: ppm_to_aqi(ppm),
            mg_per_m3: ppm_to_mg_per_m3(ppm, molecular_weight),
            warmed_up,
        }
    }
}
