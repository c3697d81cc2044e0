//! Monitor configuration parameters
//!
//! All tunables for the presence monitor.  Defaults reproduce the stock
//! firmware app.  The pinout is a build-time choice: there is no runtime
//! switch, and [`DEFAULT_PINOUT`] follows the `primary-pinout` feature.

use serde::{Deserialize, Serialize};

use crate::pins::{self, ExtPin};

/// Which of the two fixed radar wirings is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pinout {
    /// Radar OUT on [`pins::RADAR`].
    Primary,
    /// Radar OUT on [`pins::ALT_RADAR`], ground on [`pins::ALT_GROUND`].
    Alternate,
}

impl Pinout {
    /// The input pin sampled each tick under this wiring.
    pub const fn sensor_pin(self) -> ExtPin {
        match self {
            Self::Primary => pins::RADAR,
            Self::Alternate => pins::ALT_RADAR,
        }
    }
}

#[cfg(feature = "primary-pinout")]
pub const DEFAULT_PINOUT: Pinout = Pinout::Primary;

#[cfg(not(feature = "primary-pinout"))]
pub const DEFAULT_PINOUT: Pinout = Pinout::Alternate;

/// Core monitor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Radar wiring, fixed for the process lifetime
    pub pinout: Pinout,

    // --- Timing ---
    /// Input-queue poll timeout; doubles as the loop tick (milliseconds)
    pub poll_interval_ms: u32,

    // --- 5V rail ---
    /// Maximum enable attempts for the OTG rail
    pub otg_enable_attempts: u8,
    /// Settle time after each enable attempt (milliseconds)
    pub otg_retry_delay_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            pinout: DEFAULT_PINOUT,
            poll_interval_ms: 10, // ~100 Hz tick
            otg_enable_attempts: 5,
            otg_retry_delay_ms: 10,
        }
    }
}

impl MonitorConfig {
    /// Reject values that would stall or spin the loop.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be > 0");
        }
        if self.otg_enable_attempts == 0 {
            return Err("otg_enable_attempts must be > 0");
        }
        Ok(())
    }

    /// Replace any value [`validate`](Self::validate) would reject with its
    /// default.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            poll_interval_ms: if self.poll_interval_ms == 0 {
                defaults.poll_interval_ms
            } else {
                self.poll_interval_ms
            },
            otg_enable_attempts: if self.otg_enable_attempts == 0 {
                defaults.otg_enable_attempts
            } else {
                self.otg_enable_attempts
            },
            ..self
        }
    }
}
