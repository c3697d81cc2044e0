//! Application core: pure domain logic, zero I/O.
//!
//! The presence latch, the detection counter and the screen layout live
//! here.  All interaction with the host happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
pub mod state;
pub mod view;
