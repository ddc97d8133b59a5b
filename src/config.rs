//! System configuration parameters
//!
//! All tunable parameters for the CO monitor.  Defaults match the deployed
//! MQ-7 board; a JSON override can be baked in at build time through the
//! `CO_MONITOR_CONFIG` environment variable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sensors::RegressionMethod;

/// Molecular weight of carbon monoxide (g/mol).
pub const CO_MOLECULAR_WEIGHT: f32 = 28.01;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Gas model ---
    /// Molecular weight of the target gas (g/mol), used for mg/m³.
    pub molecular_weight_g_per_mol: f32,
    /// RS/R0 ratio of the sensor in clean air.
    pub clean_air_ratio: f32,
    /// Regression curve applied to RS/R0.
    pub regression_method: RegressionMethod,
    /// Regression coefficient A.
    pub regression_a: f32,
    /// Regression coefficient B.
    pub regression_b: f32,

    // --- Calibration ---
    /// Number of samples averaged into the clean-air baseline.
    pub calibration_samples: u8,

    // --- Warm-up ---
    /// Warm-up countdown length in ticks.  One tick runs per sampling cycle,
    /// so the countdown lasts `warmup_ticks * (warmup_tick_ms + sample_interval_ms)`.
    pub warmup_ticks: u32,
    /// Wait after each warm-up tick (milliseconds)
    pub warmup_tick_ms: u32,
    /// Withhold readings taken before the sensor is warmed up.
    pub suppress_warmup_readings: bool,

    // --- Timing ---
    /// Pause between sampling cycles (milliseconds)
    pub sample_interval_ms: u32,
    /// Settle time after the startup banner (milliseconds)
    pub boot_settle_ms: u32,

    // --- Indicator ---
    pub startup_blink_count: u8,
    pub startup_blink_on_ms: u32,
    pub startup_blink_off_ms: u32,
    /// LED level held once the sensor is ready (0-255).
    pub ready_indicator_level: u8,

    // --- Analog front end ---
    /// ADC full-scale voltage.
    pub adc_voltage_resolution: f32,
    /// ADC resolution in bits.
    pub adc_bit_resolution: u8,
    /// Load resistor on the sensor module (kΩ).
    pub load_resistance_kohm: f32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Gas model (MQ-7 CO curve)
            molecular_weight_g_per_mol: CO_MOLECULAR_WEIGHT,
            clean_air_ratio: 9.83,
            regression_method: RegressionMethod::Exponential,
            regression_a: 99.042,
            regression_b: -1.518,

            // Calibration
            calibration_samples: 10,

            // Warm-up
            warmup_ticks: 180,
            warmup_tick_ms: 1000,
            suppress_warmup_readings: false,

            // Timing
            sample_interval_ms: 500,
            boot_settle_ms: 1000,

            // Indicator
            startup_blink_count: 3,
            startup_blink_on_ms: 100,
            startup_blink_off_ms: 1000,
            ready_indicator_level: 80,

            // Front end
            adc_voltage_resolution: 3.3,
            adc_bit_resolution: 12,
            load_resistance_kohm: 10.0,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl SystemConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.molecular_weight_g_per_mol) {
            return Err(ConfigError::ValidationFailed("molecular weight must be > 0"));
        }
        if !positive(self.clean_air_ratio) {
            return Err(ConfigError::ValidationFailed("clean air ratio must be > 0"));
        }
        if !self.regression_a.is_finite() || self.regression_a == 0.0 {
            return Err(ConfigError::ValidationFailed("regression A must be finite and non-zero"));
        }
        if !self.regression_b.is_finite() {
            return Err(ConfigError::ValidationFailed("regression B must be finite"));
        }
        if self.calibration_samples == 0 {
            return Err(ConfigError::ValidationFailed("calibration_samples must be >= 1"));
        }
        if self.warmup_ticks == 0 {
            return Err(ConfigError::ValidationFailed("warmup_ticks must be >= 1"));
        }
        if !positive(self.adc_voltage_resolution) {
            return Err(ConfigError::ValidationFailed("ADC voltage resolution must be > 0"));
        }
        if !(1..=16).contains(&self.adc_bit_resolution) {
            return Err(ConfigError::ValidationFailed("ADC resolution must be 1-16 bits"));
        }
        if !positive(self.load_resistance_kohm) {
            return Err(ConfigError::ValidationFailed("load resistance must be > 0"));
        }
        Ok(())
    }

    /// Wall-clock length of the warm-up countdown (milliseconds).
    pub fn warmup_duration_ms(&self) -> u64 {
        u64::from(self.warmup_ticks)
            * (u64::from(self.warmup_tick_ms) + u64::from(self.sample_interval_ms))
    }

    /// Parse a JSON document (missing fields take their defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("config: {}", e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, or the JSON override baked in via `CO_MONITOR_CONFIG`.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("CO_MONITOR_CONFIG") {
            Some(json) => Self::from_json(json),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }
}
