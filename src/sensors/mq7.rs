//! MQ-7 carbon monoxide (CO) gas sensor driver.
//!
//! Reads the analog voltage output through an ESP32-S3 ADC channel,
//! converts it to the sensor resistance RS across the load resistor, and
//! applies a regression curve against the clean-air baseline R0.
//!
//! ```text
//!   V     = raw * Vres / (2^bits - 1)
//!   RS    = Vres * RL / V - RL
//!   R0    = RS_clean / clean_air_ratio
//!   ppm   = a * (RS / R0)^b
//! ```
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the configured ADC1 channel via the oneshot API
//! (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use log::{debug, error, info};

use super::RegressionMethod;
use crate::app::ports::GasSensorPort;
use crate::config::SystemConfig;
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_CO_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_co_adc(raw: u16) {
    SIM_CO_ADC.store(raw, Ordering::Relaxed);
}

/// Electrical parameters of the sensing front end.
#[derive(Debug, Clone, Copy)]
pub struct FrontEnd {
    /// ADC reference / full-scale voltage.
    pub voltage_resolution: f32,
    /// ADC resolution in bits.
    pub adc_bits: u8,
    /// Load resistor RL in kΩ.
    pub load_resistance_kohm: f32,
}

impl Default for FrontEnd {
    fn default() -> Self {
        Self {
            voltage_resolution: 3.3,
            adc_bits: 12,
            load_resistance_kohm: 10.0,
        }
    }
}

impl FrontEnd {
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            voltage_resolution: config.adc_voltage_resolution,
            adc_bits: config.adc_bit_resolution,
            load_resistance_kohm: config.load_resistance_kohm,
        }
    }

    /// Convert a raw ADC count to volts.
    pub fn volts(&self, raw: u16) -> f32 {
        let full_scale = ((1u32 << self.adc_bits) - 1) as f32;
        raw as f32 * self.voltage_resolution / full_scale
    }

    /// Sensor resistance for the given output voltage, clamped to >= 0.
    /// A 0 V reading yields `f32::INFINITY` (open line).
    pub fn sensor_resistance(&self, volts: f32) -> f32 {
        let rl = self.load_resistance_kohm;
        ((self.voltage_resolution * rl) / volts - rl).max(0.0)
    }
}

/// Evaluate the regression curve for a given RS/R0 ratio, clamped to >= 0.
pub fn ratio_to_ppm(method: RegressionMethod, a: f32, b: f32, ratio: f32) -> f32 {
    let ratio = ratio.max(0.0);
    let ppm = match method {
        RegressionMethod::Exponential => a * ratio.powf(b),
        RegressionMethod::Linear => 10.0_f32.powf((ratio.log10() - b) / a),
    };
    ppm.max(0.0)
}

pub struct Mq7Sensor {
    front_end: FrontEnd,
    method: RegressionMethod,
    a: f32,
    b: f32,
    r0: f32,
    raw: u16,
    volts: f32,
    adc_channel: u32,
}

impl Mq7Sensor {
    /// `adc_channel` is the ADC1 channel the sensor output is wired to.
    pub fn new(adc_channel: u32, front_end: FrontEnd) -> Self {
        Self {
            front_end,
            method: RegressionMethod::Exponential,
            a: 0.0,
            b: 0.0,
            r0: 0.0,
            raw: 0,
            volts: 0.0,
            adc_channel,
        }
    }

    /// Last raw ADC count captured by [`GasSensorPort::update`].
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Last sensor output voltage captured by [`GasSensorPort::update`].
    pub fn volts(&self) -> f32 {
        self.volts
    }

    pub fn r0(&self) -> f32 {
        self.r0
    }

    pub fn adc_channel(&self) -> u32 {
        self.adc_channel
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_CO_ADC.load(Ordering::Relaxed)
    }
}

impl GasSensorPort for Mq7Sensor {
    fn init(&mut self) {
        if let Err(e) = hw_init::ensure_adc() {
            error!("MQ-7: ADC init failed: {}", e);
        }
        info!(
            "MQ-7: ADC1 CH{}, Vres={:.1}V, {}-bit ADC, RL={:.1}k",
            self.adc_channel,
            self.front_end.voltage_resolution,
            self.front_end.adc_bits,
            self.front_end.load_resistance_kohm
        );
    }

    fn update(&mut self) {
        self.raw = self.read_adc();
        self.volts = self.front_end.volts(self.raw);
    }

    fn calibrate(&mut self, clean_air_ratio: f32) -> f32 {
        let rs_air = self.front_end.sensor_resistance(self.volts);
        let r0 = (rs_air / clean_air_ratio).max(0.0);
        debug!("MQ-7 calibrate: raw={} V={:.3} R0={:.3}", self.raw, self.volts, r0);
        r0
    }

    fn set_r0(&mut self, r0: f32) {
        self.r0 = r0;
    }

    fn set_regression_method(&mut self, method: RegressionMethod) {
        self.method = method;
    }

    fn set_a(&mut self, a: f32) {
        self.a = a;
    }

    fn set_b(&mut self, b: f32) {
        self.b = b;
    }

    fn read_sensor(&mut self) -> f32 {
        let rs = self.front_end.sensor_resistance(self.volts);
        ratio_to_ppm(self.method, self.a, self.b, rs / self.r0)
    }
}
