//! Sensor subsystem.
//!
//! One sensor on this board: the HC-SR04 ultrasonic rangefinder.  The
//! sampling logic is generic over a pin-level capability trait so it runs
//! against a scripted fake on the host.

pub mod ultrasonic;
