//! ProxSentry Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single synchronous control loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                 │
//! │                                                        │
//! │  HardwareAdapter              LogEventSink             │
//! │  (SensorPort + AlertPort)     (EventSink)              │
//! │                                                        │
//! │  ───────────── Port Trait Boundary ─────────────       │
//! │                                                        │
//! │  ┌──────────────────────────────────────────────┐      │
//! │  │          AppService (pure logic)             │      │
//! │  │  Ultrasonic sampling · Hysteresis detection  │      │
//! │  └──────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! One thread, one loop, ~2 Hz: sample, report, detect, actuate, sleep.

#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
mod adapters;
mod app;
mod config;
mod detector;
mod drivers;
mod pins;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use app::service::AppService;
use config::SystemConfig;
use drivers::buzzer::BuzzerDriver;
use drivers::rangefinder::RangefinderPins;
use sensors::ultrasonic::UltrasonicRanger;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ProxSentry v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. One-shot peripheral init ───────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let config = SystemConfig::default();

    let ranger = UltrasonicRanger::new(
        RangefinderPins::new(pins::TRIG_GPIO, pins::ECHO_GPIO),
        &config,
    );
    let mut hw = HardwareAdapter::new(ranger, BuzzerDriver::new(pins::BUZZER_GPIO));
    let mut sink = LogEventSink::new();

    // ── 4. Construct app service ──────────────────────────────
    let mut app = AppService::new(&config);
    app.start(&mut hw, &mut sink);

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        app.tick(&mut hw, &mut sink);

        // Fixed pacing delay; the blocking sample time inside tick()
        // brings the effective rate to roughly 2 Hz.
        drivers::hw_init::delay_ms(config.control_loop_interval_ms);

        // hw_init::delay_ms is a no-op off-target; sleep for real there.
        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.control_loop_interval_ms,
        )));
    }
}
