//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC1 oneshot unit and the CO sensor channel using raw
//! ESP-IDF sys calls.  Safe to call more than once; only the first call
//! touches the hardware.

use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

/// ADC1 channel for a GPIO on the ESP32-S3, where ADC1 covers GPIO 1-10
/// as channels 0-9.  `None` for pins outside ADC1.
pub const fn adc1_channel(gpio: i32) -> Option<u32> {
    match gpio {
        1..=10 => Some((gpio - 1) as u32),
        _ => None,
    }
}

/// ADC1 channel wired to the MQ-7 analog output.
pub const ADC1_CH_CO: u32 = match adc1_channel(crate::pins::CO_ADC_GPIO) {
    Some(ch) => ch,
    None => panic!("CO_ADC_GPIO is not an ADC1 pin"),
};

static ADC_READY: AtomicBool = AtomicBool::new(false);

/// Bring up the ADC if it has not been configured yet.
pub fn ensure_adc() -> Result<(), HwInitError> {
    if ADC_READY.load(Ordering::Acquire) {
        return Ok(());
    }
    init_adc()?;
    ADC_READY.store(true, Ordering::Release);
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded main task.
/// `init_adc()` completes before the first sensor update.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot (guarded by ADC_READY).
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ADC1_CH_CO, &chan_cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    info!("hw_init: ADC1 configured (CH{}=CO, GPIO{})", ADC1_CH_CO, crate::pins::CO_ADC_GPIO);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_adc() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): ADC init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract: single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}
