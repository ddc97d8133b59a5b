//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter   | Implements    | Connects to                   |
//! |-----------|---------------|-------------------------------|
//! | `serial`  | EventSink     | stdout (UART / USB-CDC)       |
//!
//! The gas sensor and indicator ports are implemented directly by
//! [`Mq7Sensor`](crate::sensors::mq7::Mq7Sensor) and
//! [`StatusLed`](crate::drivers::status_led::StatusLed).

pub mod serial;
