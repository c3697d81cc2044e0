//! GPIO pin assignments on the device's external header.
//!
//! Single source of truth for the radar wiring.  The RCWL-0516 drives its
//! OUT pin HIGH (3V3) on detection, so both candidate inputs are sampled as
//! pulled-down digital inputs.

use core::fmt;

/// MCU GPIO port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
}

/// A pin on the external header: MCU port/number plus the header position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtPin {
    pub port: Port,
    pub number: u8,
    /// 1-based position on the 18-pin external header.
    pub header: u8,
}

impl fmt::Display for ExtPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:?}{} (header pin {})", self.port, self.number, self.header)
    }
}

// ---------------------------------------------------------------------------
// Primary wiring
// ---------------------------------------------------------------------------

/// Radar OUT, primary wiring.
pub const RADAR: ExtPin = ExtPin { port: Port::C, number: 3, header: 7 };

// ---------------------------------------------------------------------------
// Alternate wiring
// ---------------------------------------------------------------------------

/// Radar OUT, alternate wiring.
pub const ALT_RADAR: ExtPin = ExtPin { port: Port::A, number: 7, header: 2 };
/// Ground reference for the alternate wiring.  Push-pull output, held LOW.
pub const ALT_GROUND: ExtPin = ExtPin { port: Port::A, number: 6, header: 3 };
