//! HC-SR04 ultrasonic rangefinder with noise averaging.
//!
//! One reading = 5 sub-measurements.  Each sub-measurement fires a 10 µs
//! trigger pulse, times the echo with a 30 ms cap (~5 m max range), then
//! waits 10 ms for stray acoustic reflections to die down before the next.
//!
//! A timed-out sub-measurement contributes 0 µs to the running sum and is
//! **still counted** — the average always divides by the full sub-sample
//! count, so a flaky echo dilutes the reading rather than being dropped.
//! When every sub-sample times out the reading is exactly 0.0 cm; the
//! detector's strict `> 0` guard is what keeps that from alerting.
//!
//! ## Dual-target design
//!
//! The ranger is generic over [`TriggerEcho`], the pin-level capability.
//! On ESP-IDF the implementation is [`crate::drivers::rangefinder`]; tests
//! drive the same code with a scripted fake.

use heapless::Vec;

use crate::config::SystemConfig;

/// Speed of sound in air at room temperature, cm/µs.
pub const SOUND_SPEED_CM_PER_US: f32 = 0.034;

/// Conversion factor from centimeters to inches.
pub const CM_TO_INCH: f32 = 0.393_701;

/// Upper bound on sub-measurements per reading (sizes the raw buffer).
pub const MAX_SUB_SAMPLES: usize = 5;

/// Pin-level capability the sampler needs.  Everything here blocks the
/// calling thread; the echo timing in particular must not be preempted.
pub trait TriggerEcho {
    /// Assert the trigger line for `pulse_us` microseconds.
    fn assert_trigger(&mut self, pulse_us: u32);

    /// Time the echo pulse, capped at `timeout_us`.
    /// Returns the pulse width in microseconds, or 0 on timeout.
    fn measure_echo(&mut self, timeout_us: u32) -> u32;

    /// Block for `ms` milliseconds between sub-measurements.
    fn settle(&mut self, ms: u32);
}

/// One averaged distance reading.
#[derive(Debug, Clone)]
pub struct DistanceReading {
    /// Averaged distance in centimeters.  0.0 when no echo returned at all.
    pub cm: f32,
    /// Same distance in inches, for the serial report.
    pub inches: f32,
    /// Raw echo durations of each sub-measurement (0 = timeout).
    pub raw_us: Vec<u32, MAX_SUB_SAMPLES>,
}

impl DistanceReading {
    /// Build a reading from raw sub-sample durations.
    ///
    /// The sum is divided by the sub-sample count with *integer* division
    /// before the speed-of-sound scaling — timed-out zeros dilute the
    /// average exactly as they do on the wire.
    pub fn from_raw(raw_us: Vec<u32, MAX_SUB_SAMPLES>) -> Self {
        let sum: u64 = raw_us.iter().map(|&d| u64::from(d)).sum();
        let avg_us = sum / raw_us.len().max(1) as u64;
        // Round trip: halve after scaling by the speed of sound.
        let cm = (avg_us as f32 * SOUND_SPEED_CM_PER_US) / 2.0;
        Self {
            cm,
            inches: cm * CM_TO_INCH,
            raw_us,
        }
    }
}

/// The sampler.  Owns the pin capability and the timing constants.
pub struct UltrasonicRanger<P: TriggerEcho> {
    pins: P,
    sub_samples: usize,
    trigger_pulse_us: u32,
    echo_timeout_us: u32,
    settle_delay_ms: u32,
}

impl<P: TriggerEcho> UltrasonicRanger<P> {
    pub fn new(pins: P, config: &SystemConfig) -> Self {
        Self {
            pins,
            sub_samples: (config.samples_per_reading as usize).min(MAX_SUB_SAMPLES),
            trigger_pulse_us: config.trigger_pulse_us,
            echo_timeout_us: config.echo_timeout_us,
            settle_delay_ms: config.settle_delay_ms,
        }
    }

    /// Take one averaged reading.  Blocks for the full sampling sequence
    /// (5 × settle delay plus up to 5 × echo timeout, ~50–200 ms).
    pub fn sample(&mut self) -> DistanceReading {
        let mut raw: Vec<u32, MAX_SUB_SAMPLES> = Vec::new();
        for _ in 0..self.sub_samples {
            self.pins.assert_trigger(self.trigger_pulse_us);
            let duration_us = self.pins.measure_echo(self.echo_timeout_us);
            // Capacity equals MAX_SUB_SAMPLES and the loop is bounded by it.
            let _ = raw.push(duration_us);
            self.pins.settle(self.settle_delay_ms);
        }
        DistanceReading::from_raw(raw)
    }
}
