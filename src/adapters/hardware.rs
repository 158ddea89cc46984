//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the ultrasonic ranger and the buzzer driver, exposing them through
//! [`SensorPort`] and [`AlertPort`].  This is the only module in the system
//! that touches actual hardware.  On non-espidf targets, the underlying
//! drivers use cfg-gated simulation stubs.

use crate::app::ports::{AlertPort, SensorPort};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::rangefinder::RangefinderPins;
use crate::sensors::ultrasonic::{DistanceReading, UltrasonicRanger};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    ranger: UltrasonicRanger<RangefinderPins>,
    buzzer: BuzzerDriver,
}

impl HardwareAdapter {
    pub fn new(ranger: UltrasonicRanger<RangefinderPins>, buzzer: BuzzerDriver) -> Self {
        Self { ranger, buzzer }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn sample_distance(&mut self) -> DistanceReading {
        self.ranger.sample()
    }
}

// ── AlertPort implementation ──────────────────────────────────

impl AlertPort for HardwareAdapter {
    fn set_alert(&mut self, on: bool) {
        self.buzzer.set(on);
    }

    fn is_alert_on(&self) -> bool {
        self.buzzer.is_on()
    }
}
