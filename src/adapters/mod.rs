//! Driven adapters — the outer ring of the hexagon.

pub mod hardware;
pub mod log_sink;
