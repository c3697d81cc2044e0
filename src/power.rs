//! Auxiliary 5V rail management.
//!
//! The radar module is powered from the header's OTG rail.  Another app
//! (or the user) may already have it on, so startup records the prior
//! state in a [`RailLease`] and shutdown only turns the rail off if it was
//! off before we touched it.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::app::ports::PowerRail;
use crate::error::{Error, Result};

/// Prior rail state, captured before any enable attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailLease {
    was_enabled: bool,
}

impl RailLease {
    /// Record whether the rail is already on.
    pub fn observe(rail: &impl PowerRail) -> Self {
        Self {
            was_enabled: rail.is_enabled(),
        }
    }

    pub fn was_enabled(&self) -> bool {
        self.was_enabled
    }

    /// Turn the rail off iff it is on now and was off at [`observe`](Self::observe).
    /// Returns `true` if it was disabled.
    pub fn release(self, rail: &mut impl PowerRail) -> bool {
        if rail.is_enabled() && !self.was_enabled {
            rail.disable();
            info!("5V rail disabled");
            true
        } else {
            false
        }
    }
}

/// Enable the rail, retrying up to `attempts` times with `retry_delay_ms`
/// settle time after each request.
///
/// Returns the number of enable requests issued (0 if it was already on).
pub fn enable_with_retry(
    rail: &mut (impl PowerRail + DelayNs),
    attempts: u8,
    retry_delay_ms: u32,
) -> Result<u8> {
    let mut issued: u8 = 0;
    while !rail.is_enabled() && issued < attempts {
        rail.enable();
        rail.delay_ms(retry_delay_ms);
        issued += 1;
        debug!("5V rail enable attempt {}/{}", issued, attempts);
    }

    if rail.is_enabled() {
        Ok(issued)
    } else {
        Err(Error::PowerRail { attempts: issued })
    }
}
