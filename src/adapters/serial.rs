//! Serial console report adapter.
//!
//! Implements [`EventSink`] by writing the monitor's line-oriented text
//! protocol to any `std::io::Write` (stdout → UART / USB-CDC in
//! production, a `Vec<u8>` in tests):
//!
//! ```text
//! ESP BEGIN
//! Calibrating please wait...........  done!.
//! Ready
//! PPM Value: 9.40
//! AQI Value: 100
//! CO Concentration (mg/m³): 10.77
//! ```

use std::io::Write;

use log::warn;

use crate::app::events::{AppEvent, Reading};
use crate::app::ports::EventSink;
use crate::error::CalibrationFault;

const OPEN_CIRCUIT_MSG: &str = "Warning: Connection issue, R0 is infinite (Open circuit detected) please check your wiring and supply";
const SHORT_CIRCUIT_MSG: &str = "Warning: Connection issue found, R0 is zero (Analog pin shorts to ground) please check your wiring and supply";

/// Adapter that prints every [`AppEvent`] in the serial text format.
pub struct SerialReporter<W: Write> {
    out: W,
}

impl<W: Write> SerialReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &AppEvent) -> std::io::Result<()> {
        match event {
            AppEvent::Started => writeln!(self.out, "ESP BEGIN")?,
            AppEvent::CalibrationStarted { .. } => write!(self.out, "Calibrating please wait.")?,
            AppEvent::CalibrationSample { .. } => write!(self.out, ".")?,
            AppEvent::CalibrationFinished { .. } => writeln!(self.out, "  done!.")?,
            AppEvent::CalibrationFailed(fault) => {
                let msg = match fault {
                    CalibrationFault::OpenCircuit => OPEN_CIRCUIT_MSG,
                    CalibrationFault::ShortCircuit => SHORT_CIRCUIT_MSG,
                };
                writeln!(self.out, "{}", msg)?;
            }
            AppEvent::Ready => writeln!(self.out, "Ready")?,
            AppEvent::Reading(r) => self.write_reading(r)?,
        }
        self.out.flush()
    }

    fn write_reading(&mut self, r: &Reading) -> std::io::Result<()> {
        writeln!(self.out, "PPM Value: {:.2}", r.ppm)?;
        writeln!(self.out, "AQI Value: {}", r.aqi)?;
        writeln!(self.out, "CO Concentration (mg/m³): {:.2}", r.mg_per_m3)
    }
}

impl<W: Write> EventSink for SerialReporter<W> {
    fn emit(&mut self, event: &AppEvent) {
        if let Err(e) = self.write_event(event) {
            warn!("serial report dropped: {}", e);
        }
    }
}
