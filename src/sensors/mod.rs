//! Sensor subsystem: the MQ-7 carbon monoxide driver.
//!
//! The driver implements [`GasSensorPort`](crate::app::ports::GasSensorPort)
//! so the application core can calibrate and sample it without touching
//! the ADC directly.

pub mod mq7;

use serde::{Deserialize, Serialize};

/// Curve used to turn the RS/R0 ratio into a concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegressionMethod {
    /// `ppm = a * ratio^b` (datasheet power-law fit).
    #[default]
    Exponential,
    /// `ppm = 10^((log10(ratio) - b) / a)` (straight line in log-log space).
    Linear,
}
