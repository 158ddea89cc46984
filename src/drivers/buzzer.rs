//! Buzzer / vibration motor driver.
//!
//! Plain on/off digital output — no PWM, the haptic module has its own
//! driver stage.  This is a dumb actuator; alerting policy lives in the
//! hysteresis detector.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct BuzzerDriver {
    gpio: i32,
    on: bool,
}

impl BuzzerDriver {
    /// Construct with the output silenced.
    pub fn new(gpio: i32) -> Self {
        hw_init::gpio_write(gpio, false);
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
