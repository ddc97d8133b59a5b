//! PPM → AQI and PPM → mg/m³ conversion.
//!
//! Piecewise-linear AQI over the carbon monoxide breakpoint table:
//!
//! ```text
//!   ppm  0 ── 4.4 ── 9.4 ── 12.4 ── 15.4 ── 30.4 ── 500
//!   AQI  0 ── 50 ─── 100 ── 150 ─── 200 ─── 300 ─── 500
//! ```
//!
//! Pure functions, no state.

/// Molar volume of an ideal gas at 25 °C and 1 atm (L/mol).
pub const MOLAR_VOLUME_L: f32 = 24.45;

/// Highest value on the AQI scale.
pub const AQI_MAX: u16 = 500;

const PPM_BREAKPOINTS: [f32; 7] = [0.0, 4.4, 9.4, 12.4, 15.4, 30.4, 500.0];
const AQI_BREAKPOINTS: [u16; 7] = [0, 50, 100, 150, 200, 300, AQI_MAX];

/// Map a concentration to the 0–500 AQI scale.
///
/// The first band whose upper ppm bound is >= `ppm` is interpolated and the
/// result truncated.  Non-positive (and NaN) input maps to 0, anything above
/// the table saturates at 500.
pub fn ppm_to_aqi(ppm: f32) -> u16 {
    if ppm.is_nan() || ppm <= 0.0 {
        return 0;
    }
    for band in 0..PPM_BREAKPOINTS.len() - 1 {
        let (ppm_lo, ppm_hi) = (PPM_BREAKPOINTS[band], PPM_BREAKPOINTS[band + 1]);
        if ppm > ppm_hi {
            continue;
        }
        let (aqi_lo, aqi_hi) = (
            f32::from(AQI_BREAKPOINTS[band]),
            f32::from(AQI_BREAKPOINTS[band + 1]),
        );
        // Exact upper breakpoint must land on the band's AQI, not a rounding below it.
        if ppm == ppm_hi {
            return AQI_BREAKPOINTS[band + 1];
        }
        let aqi = aqi_lo + (aqi_hi - aqi_lo) / (ppm_hi - ppm_lo) * (ppm - ppm_lo);
        return aqi.clamp(aqi_lo, aqi_hi) as u16;
    }
    AQI_MAX
}

/// Convert a gas concentration in ppm to mg/m³ for the given molecular weight.
pub fn ppm_to_mg_per_m3(ppm: f32, molecular_weight: f32) -> f32 {
    ppm * molecular_weight / MOLAR_VOLUME_L
}
