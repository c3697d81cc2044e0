//! Sensor drivers.

pub mod radar;
