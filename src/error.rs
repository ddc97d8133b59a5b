//! Unified error types for the CO monitor firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the binary's
//! entry point handles failures uniformly.  All variants are `Copy` so they
//! can be passed around the control path without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Baseline calibration failed; the sensor wiring is faulty.
    Calibration(CalibrationFault),
    /// A sampling cycle was requested before a valid baseline was installed.
    NotCalibrated,
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calibration(e) => write!(f, "calibration: {e}"),
            Self::NotCalibrated => write!(f, "sensor not calibrated"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Calibration faults
// ---------------------------------------------------------------------------

/// Fatal hardware faults detected while computing the clean-air baseline.
///
/// Both are unrecoverable: once raised, no reading is ever taken for the
/// remainder of the power cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationFault {
    /// Baseline came out infinite: the analog line reads 0 V (open circuit).
    OpenCircuit,
    /// Baseline came out zero: the analog pin is shorted.
    ShortCircuit,
}

impl fmt::Display for CalibrationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenCircuit => write!(f, "R0 is infinite (open circuit)"),
            Self::ShortCircuit => write!(f, "R0 is zero (analog pin shorted)"),
        }
    }
}

impl std::error::Error for CalibrationFault {}

impl From<CalibrationFault> for Error {
    fn from(e: CalibrationFault) -> Self {
        Self::Calibration(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating [`SystemConfig`](crate::config::SystemConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be deserialised.
    Parse,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "malformed config document"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
