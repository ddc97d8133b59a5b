//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the warm-up FSM, the installed baseline, and the
//! configuration.  It exposes a clean, hardware-agnostic API.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  GasSensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                    │       AppService        │
//!  IndicatorPort ◀── │ Calibration · FSM · AQI │ ──▶ DelayNs
//!                    └────────────────────────┘
//! ```
//!
//! Lifecycle: [`setup`](AppService::setup) once (startup blink, banner,
//! calibration), then [`cycle`](AppService::cycle) forever.  A calibration
//! fault is latched: it is returned to the caller, every later calibration
//! attempt returns it again without touching the sensor, and every cycle is
//! refused with [`Error::Calibration`].

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::calibration::{Baseline, Calibrator};
use crate::config::SystemConfig;
use crate::drivers::status_led::{LEVEL_OFF, LEVEL_ON};
use crate::error::{CalibrationFault, Error, Result};
use crate::fsm::context::FsmContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, Reading};
use super::ports::{EventSink, GasSensorPort, IndicatorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    fsm: Fsm,
    ctx: FsmContext,
    /// Installed clean-air baseline; `None` until calibration succeeds.
    baseline: Option<Baseline>,
    /// Latched wiring fault.  Once set it is never cleared.
    fault: Option<CalibrationFault>,
    cycle_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware; call [`setup`](Self::setup) next.
    pub fn new(config: SystemConfig) -> Self {
        let ctx = FsmContext::new(&config);
        let fsm = Fsm::new(build_state_table(), StateId::Warming);
        Self {
            config,
            fsm,
            ctx,
            baseline: None,
            fault: None,
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Startup indicator sequence, banner, then settle.
    pub fn boot(
        &mut self,
        led: &mut impl IndicatorPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) {
        for _ in 0..self.config.startup_blink_count {
            led.set_level(LEVEL_ON);
            delay.delay_ms(self.config.startup_blink_on_ms);
            led.set_level(LEVEL_OFF);
            delay.delay_ms(self.config.startup_blink_off_ms);
        }
        sink.emit(&AppEvent::Started);
        info!("CO monitor v{} started", env!("CARGO_PKG_VERSION"));
        delay.delay_ms(self.config.boot_settle_ms);
    }

    /// Configure the regression model, then compute and install R0.
    ///
    /// On success the warm-up countdown starts.  On failure the fault is
    /// latched, no baseline is installed and every later
    /// [`cycle`](Self::cycle) is refused.  A faulted service returns the
    /// latched fault without touching the sensor.
    pub fn calibrate(
        &mut self,
        sensor: &mut impl GasSensorPort,
        led: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) -> core::result::Result<Baseline, CalibrationFault> {
        if let Some(fault) = self.fault {
            warn!("calibration refused: fault latched ({})", fault);
            return Err(fault);
        }
        if let Some(baseline) = self.baseline {
            return Ok(baseline);
        }

        sensor.set_regression_method(self.config.regression_method);
        sensor.set_a(self.config.regression_a);
        sensor.set_b(self.config.regression_b);
        sensor.init();

        let calibrator = Calibrator::new(self.config.clean_air_ratio, self.config.calibration_samples);
        let baseline = calibrator.run(sensor, sink).inspect_err(|&fault| {
            self.fault = Some(fault);
        })?;
        self.baseline = Some(baseline);

        self.fsm.start(&mut self.ctx);
        self.apply_indicator(led);
        Ok(baseline)
    }

    /// [`boot`](Self::boot) followed by [`calibrate`](Self::calibrate).
    pub fn setup(
        &mut self,
        sensor: &mut impl GasSensorPort,
        led: &mut impl IndicatorPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> core::result::Result<Baseline, CalibrationFault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        self.boot(led, delay, sink);
        self.calibrate(sensor, led, sink)
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one sampling cycle: warm-up tick → sample → convert → report → pause.
    ///
    /// Readings taken while warming are still reported (flagged
    /// `warmed_up = false`) unless `suppress_warmup_readings` is set.
    pub fn cycle(
        &mut self,
        sensor: &mut impl GasSensorPort,
        led: &mut impl IndicatorPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<Reading> {
        if let Some(fault) = self.fault {
            return Err(Error::Calibration(fault));
        }
        if self.baseline.is_none() {
            return Err(Error::NotCalibrated);
        }
        self.cycle_count += 1;

        // 1. Warm-up countdown (one tick per cycle until ready)
        if self.fsm.current_state() == StateId::Warming {
            self.fsm.tick(&mut self.ctx);
            self.apply_indicator(led);
            if self.fsm.current_state() == StateId::Ready {
                sink.emit(&AppEvent::Ready);
            }
            delay.delay_ms(self.config.warmup_tick_ms);
        }

        // 2. Sample via GasSensorPort
        sensor.update();
        let ppm = sensor.read_sensor();

        // 3. Convert
        let reading = Reading::from_ppm(ppm, self.config.molecular_weight_g_per_mol, self.is_ready());
        debug!(
            "cycle {}: {:.2} ppm, AQI {}, {:.2} mg/m3{}",
            self.cycle_count,
            reading.ppm,
            reading.aqi,
            reading.mg_per_m3,
            if reading.warmed_up { "" } else { " (warming)" }
        );

        // 4. Report
        if reading.warmed_up || !self.config.suppress_warmup_readings {
            sink.emit(&AppEvent::Reading(reading));
        }

        // 5. Pause
        delay.delay_ms(self.config.sample_interval_ms);
        Ok(reading)
    }

    /// Sample forever.  Only returns if a cycle is refused.
    pub fn run(
        &mut self,
        sensor: &mut impl GasSensorPort,
        led: &mut impl IndicatorPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<Infallible> {
        loop {
            self.cycle(sensor, led, delay, sink)?;
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current warm-up state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn is_ready(&self) -> bool {
        self.fsm.current_state() == StateId::Ready
    }

    /// The installed baseline, if calibration succeeded.
    pub fn baseline(&self) -> Option<Baseline> {
        self.baseline
    }

    /// The latched calibration fault, if any.
    pub fn fault(&self) -> Option<CalibrationFault> {
        self.fault
    }

    /// Sampling cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Forward a pending FSM indicator command to the port.
    fn apply_indicator(&mut self, led: &mut impl IndicatorPort) {
        if let Some(level) = self.ctx.take_indicator_level() {
            led.set_level(level);
        }
    }
}
