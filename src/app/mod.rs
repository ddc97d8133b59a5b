//! Application core: pure domain logic, zero I/O.
//!
//! Startup, baseline calibration, warm-up gating and the sampling loop.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
