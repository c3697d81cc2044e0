//! Unified error types for the sleep counter.
//!
//! The monitor loop itself never fails: every port is infallible at the
//! domain boundary.  These errors exist for the adapters underneath the
//! ports (GPIO, PWM) and for the one retried startup step (the 5V rail),
//! so each of them can be logged uniformly before being absorbed.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The auxiliary 5V rail still reported disabled after every attempt.
    PowerRail { attempts: u8 },
    /// A digital pin read or write failed.  Carries the pin role.
    Gpio(&'static str),
    /// A PWM duty-cycle write on the status LED failed.  Carries the channel.
    Led(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerRail { attempts } => {
                write!(f, "5V rail not enabled after {attempts} attempt(s)")
            }
            Self::Gpio(pin) => write!(f, "GPIO access failed: {pin}"),
            Self::Led(channel) => write!(f, "LED duty write failed: {channel}"),
        }
    }
}

impl core::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
