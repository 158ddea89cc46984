//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! This is the system's entire reporting surface — one human-readable
//! stream, no consumer contract beyond that.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::detector::DetectionState;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Ready => {
                info!("System ready");
            }
            AppEvent::Distance(r) => {
                info!("Distance (cm): {:.2} | Distance (inch): {:.2}", r.cm, r.inches);
            }
            AppEvent::StateChanged { to, distance_cm } => match to {
                DetectionState::Alerting => {
                    warn!("Intruder detected! ({:.2} cm)", distance_cm);
                }
                DetectionState::Clear => {
                    info!("Area clear ({:.2} cm)", distance_cm);
                }
            },
        }
    }
}
