//! Two-threshold hysteresis intruder detector.
//!
//! A 2-state machine: `Clear` (initial) and `Alerting`.
//!
//! ```text
//!            0 < d < near_threshold
//!   ┌───────┐ ────────────────────▶ ┌──────────┐
//!   │ Clear │                       │ Alerting │
//!   └───────┘ ◀──────────────────── └──────────┘
//!            d > far_threshold
//! ```
//!
//! The gap between the two thresholds is a deliberate dead band: a reading
//! inside it (or `d <= 0` while already Clear) holds the current state, so
//! noisy readings near the boundary cannot make the alert chatter.
//!
//! The `d > 0` guard on entry doubles as the "no echo" filter — a cycle in
//! which every sub-sample timed out averages to exactly 0.0 cm, and must not
//! be read as "object touching the sensor".

use crate::config::SystemConfig;

/// Detection state, carried across control cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionState {
    /// No intruder in the detection zone.
    Clear,
    /// Intruder detected; alert output active.
    Alerting,
}

/// Hysteresis detector.  Owns the one piece of state that persists
/// between control cycles.
pub struct HysteresisDetector {
    state: DetectionState,
    near_cm: f32,
    far_cm: f32,
}

impl HysteresisDetector {
    /// Construct a detector in the `Clear` state.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: DetectionState::Clear,
            near_cm: config.near_threshold_cm,
            far_cm: config.far_threshold_cm,
        }
    }

    /// Evaluate one distance reading.
    ///
    /// Returns `Some(next)` only when the state actually changes; `None`
    /// means the reading fell in the dead band (or on a boundary — both
    /// comparisons are strict) and the current state holds.
    pub fn update(&mut self, distance_cm: f32) -> Option<DetectionState> {
        let next = match self.state {
            DetectionState::Clear if distance_cm > 0.0 && distance_cm < self.near_cm => {
                DetectionState::Alerting
            }
            DetectionState::Alerting if distance_cm > self.far_cm => DetectionState::Clear,
            _ => return None,
        };
        self.state = next;
        Some(next)
    }

    /// Current detection state.
    pub fn state(&self) -> DetectionState {
        self.state
    }

    /// True while an intruder is being reported.
    pub fn is_alerting(&self) -> bool {
        self.state == DetectionState::Alerting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_detector() -> HysteresisDetector {
        HysteresisDetector::new(&SystemConfig::default())
    }

    #[test]
    fn starts_clear() {
        let det = make_detector();
        assert_eq!(det.state(), DetectionState::Clear);
        assert!(!det.is_alerting());
    }

    #[test]
    fn close_object_triggers_alert() {
        let mut det = make_detector();
        assert_eq!(det.update(5.0), Some(DetectionState::Alerting));
        assert!(det.is_alerting());
    }

    #[test]
    fn zero_distance_never_triggers() {
        // All-timeout cycles average to exactly zero; the strict > 0 guard
        // keeps "no echo" from reading as "object at the sensor face".
        let mut det = make_detector();
        assert_eq!(det.update(0.0), None);
        assert_eq!(det.state(), DetectionState::Clear);
    }

    #[test]
    fn dead_band_holds_clear() {
        let mut det = make_detector();
        for _ in 0..100 {
            assert_eq!(det.update(7.0), None);
        }
        assert_eq!(det.state(), DetectionState::Clear);
    }

    #[test]
    fn dead_band_holds_alerting() {
        let mut det = make_detector();
        det.update(4.0);
        assert!(det.is_alerting());
        for _ in 0..100 {
            assert_eq!(det.update(7.0), None);
        }
        assert!(det.is_alerting());
    }

    #[test]
    fn entry_boundary_is_strict() {
        let mut det = make_detector();
        assert_eq!(det.update(6.0), None);
        assert_eq!(det.state(), DetectionState::Clear);
    }

    #[test]
    fn exit_boundary_is_strict() {
        let mut det = make_detector();
        det.update(4.0);
        assert_eq!(det.update(8.0), None);
        assert!(det.is_alerting());
    }

    #[test]
    fn far_object_clears_alert() {
        let mut det = make_detector();
        det.update(4.0);
        assert_eq!(det.update(9.0), Some(DetectionState::Clear));
        assert!(!det.is_alerting());
    }

    #[test]
    fn zero_distance_holds_alerting() {
        // Losing the echo entirely while alerting must not silence the alarm.
        let mut det = make_detector();
        det.update(4.0);
        assert_eq!(det.update(0.0), None);
        assert!(det.is_alerting());
    }

    #[test]
    fn walkthrough_scenario() {
        let mut det = make_detector();
        let distances = [10.0, 5.0, 4.0, 9.0];
        let expected = [
            DetectionState::Clear,
            DetectionState::Alerting,
            DetectionState::Alerting,
            DetectionState::Clear,
        ];
        for (d, want) in distances.iter().zip(expected) {
            det.update(*d);
            assert_eq!(det.state(), want, "after distance {d}");
        }
    }
}
