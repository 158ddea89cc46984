//! System configuration parameters
//!
//! All tunable parameters for the ProxSentry system.  Values are fixed at
//! construction — there is no runtime provisioning or persistence — but they
//! live in one injectable struct so tests can substitute their own.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Sampling ---
    /// Sub-measurements averaged into one distance reading
    pub samples_per_reading: u8,
    /// Trigger pulse width (microseconds)
    pub trigger_pulse_us: u32,
    /// Echo timeout (microseconds); ~5 m max range at 30 000 µs
    pub echo_timeout_us: u32,
    /// Settle delay between sub-measurements (milliseconds)
    pub settle_delay_ms: u32,

    // --- Detection thresholds ---
    /// Distance (cm) below which an intruder is detected
    pub near_threshold_cm: f32,
    /// Distance (cm) above which the area is considered clear again
    pub far_threshold_cm: f32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Sampling
            samples_per_reading: 5,
            trigger_pulse_us: 10,
            echo_timeout_us: 30_000,
            settle_delay_ms: 10,

            // Thresholds (2 cm hysteresis gap)
            near_threshold_cm: 6.0,
            far_threshold_cm: 8.0,

            // Timing
            control_loop_interval_ms: 500, // 2 Hz
        }
    }
}
