//! Clean-air baseline (R0) calibration.
//!
//! The sensor driver is sampled a fixed number of times; each sample's
//! calibration contribution is summed and the sum averaged into R0.  An
//! infinite baseline means the analog line is open, a zero baseline means
//! it is shorted.  Either is fatal: the caller receives the fault and must
//! not sample the sensor afterwards.

use log::{error, info};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, GasSensorPort};
use crate::error::CalibrationFault;

/// A validated clean-air baseline: strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline(f32);

impl Baseline {
    /// Validate a raw averaged R0.
    ///
    /// NaN is treated like infinity (the line is not delivering a voltage);
    /// anything at or below zero is a short.
    pub fn new(r0: f32) -> Result<Self, CalibrationFault> {
        if r0.is_infinite() || r0.is_nan() {
            return Err(CalibrationFault::OpenCircuit);
        }
        if r0 <= 0.0 {
            return Err(CalibrationFault::ShortCircuit);
        }
        Ok(Self(r0))
    }

    pub fn r0(self) -> f32 {
        self.0
    }
}

/// Runs the averaging procedure against a [`GasSensorPort`].
pub struct Calibrator {
    clean_air_ratio: f32,
    samples: u8,
}

impl Calibrator {
    pub fn new(clean_air_ratio: f32, samples: u8) -> Self {
        Self {
            clean_air_ratio,
            samples,
        }
    }

    /// Sample, average, validate, and on success install R0 into the driver.
    pub fn run(
        &self,
        sensor: &mut impl GasSensorPort,
        sink: &mut impl EventSink,
    ) -> Result<Baseline, CalibrationFault> {
        info!(
            "Calibrating: {} samples, clean-air ratio {:.2}",
            self.samples, self.clean_air_ratio
        );
        sink.emit(&AppEvent::CalibrationStarted {
            samples: self.samples,
        });

        let mut sum = 0.0_f32;
        for index in 1..=self.samples {
            sensor.update();
            let contribution = sensor.calibrate(self.clean_air_ratio);
            sum += contribution;
            sink.emit(&AppEvent::CalibrationSample {
                index,
                contribution,
            });
        }

        let r0 = sum / f32::from(self.samples);
        sink.emit(&AppEvent::CalibrationFinished { r0 });

        match Baseline::new(r0) {
            Ok(baseline) => {
                sensor.set_r0(baseline.r0());
                info!("Calibration done: R0={:.3}", baseline.r0());
                Ok(baseline)
            }
            Err(fault) => {
                error!("Calibration failed: {} (check wiring and supply)", fault);
                sink.emit(&AppEvent::CalibrationFailed(fault));
                Err(fault)
            }
        }
    }
}
