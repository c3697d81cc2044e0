//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing monitor events through the `log`
//! facade (serial console on the device, `env_logger` in the simulator).

use log::info;

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started {
                pinout,
                rail_was_enabled,
            } => {
                info!(
                    "START | pinout={:?} sensor={} | rail={}",
                    pinout,
                    pinout.sensor_pin(),
                    if *rail_was_enabled { "pre-enabled" } else { "ours" }
                );
            }
            MonitorEvent::RailUnavailable { attempts } => {
                info!("RAIL | unavailable after {} attempt(s)", attempts);
            }
            MonitorEvent::PresenceDetected { count } => {
                info!("DETECT | count={}", count);
            }
            MonitorEvent::PresenceCleared { count } => {
                info!("CLEAR | count={}", count);
            }
            MonitorEvent::ExitRequested => {
                info!("EXIT | back pressed");
            }
            MonitorEvent::Stopped { count, ticks } => {
                info!("STOP | count={} ticks={}", count, ticks);
            }
        }
    }
}
