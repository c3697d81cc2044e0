//! Outbound monitor events.
//!
//! The [`Monitor`](super::service::Monitor) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log to serial, count them in a test.

use crate::config::Pinout;

/// Structured events emitted by the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Startup finished.  `rail_was_enabled`: someone else had the 5V rail on.
    Started { pinout: Pinout, rail_was_enabled: bool },

    /// The 5V rail would not come up; running anyway.
    RailUnavailable { attempts: u8 },

    /// Rising edge.  `count` is the counter after incrementing.
    PresenceDetected { count: u32 },

    /// Falling edge.
    PresenceCleared { count: u32 },

    /// Back key pressed.
    ExitRequested,

    /// Shutdown finished.
    Stopped { count: u32, ticks: u64 },
}
