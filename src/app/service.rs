//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the hysteresis detector and runs one control cycle
//! per tick.  All I/O flows through port traits injected at call sites,
//! making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService       │
//!   AlertPort ◀── │  Sampler · Hysteresis  │
//!                 └────────────────────────┘
//! ```

use log::info;

use crate::config::SystemConfig;
use crate::detector::{DetectionState, HysteresisDetector};

use super::events::AppEvent;
use super::ports::{AlertPort, EventSink, SensorPort};

/// The application service orchestrates the detection loop.
pub struct AppService {
    detector: HysteresisDetector,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware — call [`Self::start`] next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            detector: HysteresisDetector::new(config),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring the system to its safe initial state: alert output off,
    /// detector Clear, ready banner on the log.
    pub fn start(&mut self, hw: &mut impl AlertPort, sink: &mut impl EventSink) {
        hw.set_alert(false);
        sink.emit(&AppEvent::Ready);
        info!("AppService started, detector {:?}", self.detector.state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: sample → report → detect → actuate.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`AlertPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn tick(&mut self, hw: &mut (impl SensorPort + AlertPort), sink: &mut impl EventSink) {
        self.tick_count += 1;

        // 1. Sample the rangefinder (blocks for the averaging sequence).
        let reading = hw.sample_distance();

        // 2. Report the reading every cycle, transition or not.
        sink.emit(&AppEvent::Distance(reading.clone()));

        // 3. Hysteresis detection; actuate only on an actual transition.
        if let Some(next) = self.detector.update(reading.cm) {
            hw.set_alert(next == DetectionState::Alerting);
            sink.emit(&AppEvent::StateChanged {
                to: next,
                distance_cm: reading.cm,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current detection state.
    pub fn state(&self) -> DetectionState {
        self.detector.state()
    }

    /// True while an intruder is being reported.
    pub fn is_alerting(&self) -> bool {
        self.detector.is_alerting()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
