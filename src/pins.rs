//! GPIO pin assignments for the ProxSentry board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// HC-SR04 ultrasonic rangefinder
// ---------------------------------------------------------------------------

/// Digital output: carries the 10 µs measurement trigger pulse to the sensor.
pub const TRIG_GPIO: i32 = 5;
/// Digital input: goes HIGH for the duration of the reflected-burst echo.
pub const ECHO_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Alert output
// ---------------------------------------------------------------------------

/// Digital output: HIGH = alert active.  Drives the buzzer / vibration
/// motor through a transistor stage, not directly from the GPIO.
pub const BUZZER_GPIO: i32 = 17;
