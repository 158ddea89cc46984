//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  The adapter on the other
//! side decides what to do with them — today that is the serial log.

use crate::detector::DetectionState;
use crate::sensors::ultrasonic::DistanceReading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Pins configured, alert forced off, system entering the control loop.
    Ready,

    /// One averaged distance reading (emitted every cycle).
    Distance(DistanceReading),

    /// The detector transitioned between states.
    StateChanged {
        to: DetectionState,
        distance_cm: f32,
    },
}
