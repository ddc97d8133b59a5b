//! GPIO / peripheral pin assignments for the CO monitor board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.
//!
//! Target chip: **ESP32-S3**.  The analog mapping below does not hold on
//! other ESP32 variants (on the ESP32-C3, GPIO 5 sits on ADC2 and ADC1
//! channel 4 is GPIO 4, the LED pin here).

// ---------------------------------------------------------------------------
// Sensor: Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-7 CO gas sensor analog output.
/// ADC1 channel 4 on ESP32-S3 (see `drivers::hw_init::adc1_channel`).
pub const CO_ADC_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Indicator LED
// ---------------------------------------------------------------------------

/// LEDC PWM output driving the indicator LED anode.
pub const LED_GPIO: i32 = 4;
/// Held LOW: ground return for the indicator LED.
pub const LED_GND_GPIO: i32 = 3;

/// LEDC frequency for the indicator LED (1 kHz, 8-bit).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
