//! Single-colour status LED driver.
//!
//! Drives the indicator LED through any embedded-hal PWM channel so it can
//! both blink at full brightness and hold a dimmed "ready" level.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: wraps an LEDC channel (`LedcDriver` implements `SetDutyCycle`).
//! On host/test: any in-memory `SetDutyCycle` implementation.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::IndicatorPort;

/// Full-brightness level used for blinking.
pub const LEVEL_ON: u8 = u8::MAX;
pub const LEVEL_OFF: u8 = 0;

pub struct StatusLed<P> {
    pwm: P,
    current: u8,
}

impl<P: SetDutyCycle> StatusLed<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, current: LEVEL_OFF }
    }

    pub fn current_level(&self) -> u8 {
        self.current
    }

    /// Hand the PWM channel back (tests inspect the recorded duty).
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> IndicatorPort for StatusLed<P> {
    fn set_level(&mut self, level: u8) {
        match self.pwm.set_duty_cycle_fraction(u16::from(level), u16::from(LEVEL_ON)) {
            Ok(()) => self.current = level,
            Err(e) => warn!("status LED: duty update failed: {:?}", e),
        }
    }
}
