//! CO Monitor Firmware: Main Entry Point
//!
//! Hexagonal layout: board adapters on the outside, [`AppService`] in the
//! middle, everything wired together here.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  Mq7Sensor        StatusLed<LedcDriver>   SerialReporter       │
//! │  (GasSensorPort)  (IndicatorPort)         (EventSink)          │
//! │  FreeRtos (DelayNs)                                            │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  Calibration · Warm-up FSM · AQI conversion            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use embedded_hal::delay::DelayNs;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::PinDriver;
use esp_idf_svc::hal::ledc::config::TimerConfig;
use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::units::Hertz;
use log::{error, info};

use comonitor::adapters::serial::SerialReporter;
use comonitor::app::service::AppService;
use comonitor::config::SystemConfig;
use comonitor::drivers::hw_init;
use comonitor::drivers::status_led::StatusLed;
use comonitor::pins;
use comonitor::sensors::mq7::{FrontEnd, Mq7Sensor};

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  CO Monitor v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration (defaults or build-time override) ────
    let config = SystemConfig::from_build_env()?;
    info!(
        "Config: warm-up {} ticks ({} s), {} calibration samples, sample every {} ms",
        config.warmup_ticks,
        config.warmup_duration_ms() / 1000,
        config.calibration_samples,
        config.sample_interval_ms
    );

    // ── 3. Indicator LED (LEDC PWM + ground return) ───────────
    let peripherals = Peripherals::take()?;
    let mut led_gnd = PinDriver::output(peripherals.pins.gpio3)?;
    led_gnd.set_low()?;
    let led_timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::default()
            .frequency(Hertz(pins::LED_PWM_FREQ_HZ))
            .resolution(Resolution::Bits8),
    )?;
    let led_pwm = LedcDriver::new(peripherals.ledc.channel0, &led_timer, peripherals.pins.gpio4)?;
    let mut led = StatusLed::new(led_pwm);

    // ── 4. Sensor ADC ─────────────────────────────────────────
    hw_init::ensure_adc()?;
    let mut sensor = Mq7Sensor::new(hw_init::ADC1_CH_CO, FrontEnd::from_config(&config));

    let mut delay = FreeRtos;
    let mut reporter = SerialReporter::new(std::io::stdout());
    let mut app = AppService::new(config);

    // ── 5. Startup + calibration (fail-stop on wiring fault) ──
    if let Err(fault) = app.setup(&mut sensor, &mut led, &mut delay, &mut reporter) {
        error!("Calibration fault: {}; halting, no readings will be taken", fault);
        loop {
            delay.delay_ms(1000);
        }
    }

    // ── 6. Sampling loop ──────────────────────────────────────
    match app.run(&mut sensor, &mut led, &mut delay, &mut reporter) {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}
