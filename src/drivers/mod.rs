//! Actuator drivers.

pub mod status_led;
