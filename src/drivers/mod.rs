//! Indicator driver and hardware initialisation.

pub mod hw_init;
pub mod status_led;
