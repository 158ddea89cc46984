//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (the rangefinder, the buzzer, the log) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::sensors::ultrasonic::DistanceReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain one averaged distance
/// reading.  Blocks for the full sampling sequence.
pub trait SensorPort {
    fn sample_distance(&mut self) -> DistanceReading;
}

// ───────────────────────────────────────────────────────────────
// Alert port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the alert output.
pub trait AlertPort {
    /// Energise (true) or silence (false) the buzzer / vibration motor.
    fn set_alert(&mut self, on: bool);

    /// Query whether the alert output is currently energised.
    fn is_alert_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go — serial log today,
/// anything else tomorrow.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
