//! Pin-level HC-SR04 driver — the [`TriggerEcho`] capability on real GPIO.
//!
//! Trigger pulse shape per the datasheet: pull the line low briefly to get
//! a clean edge, hold high for 10 µs, drop.  Echo timing is a polled busy
//! wait with a shared deadline across the wait-for-rise and pulse-width
//! phases, so a stuck line can never block longer than the timeout.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers and the esp_timer clock.
//! On host/test: echo durations come from a static `AtomicU32` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU32, Ordering};

use crate::drivers::hw_init;
use crate::sensors::ultrasonic::TriggerEcho;

#[cfg(not(target_os = "espidf"))]
static SIM_ECHO_US: AtomicU32 = AtomicU32::new(0);

/// Inject the echo duration returned by the next host-side measurements.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(us: u32) {
    SIM_ECHO_US.store(us, Ordering::Relaxed);
}

/// Owns the trigger and echo pin numbers.
pub struct RangefinderPins {
    trig_gpio: i32,
    echo_gpio: i32,
}

impl RangefinderPins {
    pub fn new(trig_gpio: i32, echo_gpio: i32) -> Self {
        Self {
            trig_gpio,
            echo_gpio,
        }
    }
}

impl TriggerEcho for RangefinderPins {
    fn assert_trigger(&mut self, pulse_us: u32) {
        // Clean low edge before the pulse.
        hw_init::gpio_write(self.trig_gpio, false);
        hw_init::delay_us(2);
        hw_init::gpio_write(self.trig_gpio, true);
        hw_init::delay_us(pulse_us);
        hw_init::gpio_write(self.trig_gpio, false);
    }

    #[cfg(target_os = "espidf")]
    fn measure_echo(&mut self, timeout_us: u32) -> u32 {
        let deadline = hw_init::now_us() + i64::from(timeout_us);

        // Wait for the echo pulse to start.
        while !hw_init::gpio_read(self.echo_gpio) {
            if hw_init::now_us() >= deadline {
                return 0;
            }
        }

        // Time the pulse itself against the same deadline.
        let start = hw_init::now_us();
        while hw_init::gpio_read(self.echo_gpio) {
            if hw_init::now_us() >= deadline {
                return 0;
            }
        }
        (hw_init::now_us() - start) as u32
    }

    #[cfg(not(target_os = "espidf"))]
    fn measure_echo(&mut self, timeout_us: u32) -> u32 {
        let us = SIM_ECHO_US.load(Ordering::Relaxed);
        if us >= timeout_us { 0 } else { us }
    }

    fn settle(&mut self, ms: u32) {
        hw_init::delay_ms(ms);
    }
}
