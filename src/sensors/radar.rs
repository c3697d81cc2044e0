//! RCWL-0516 microwave presence radar.
//!
//! The module pulls OUT high (3V3) for ~2 s after any movement and
//! re-triggers while movement continues.  Two wirings are supported:
//!
//! | Pinout    | OUT               | GND                           |
//! |-----------|-------------------|-------------------------------|
//! | Primary   | `pins::RADAR`     | header GND                    |
//! | Alternate | `pins::ALT_RADAR` | `pins::ALT_GROUND` driven LOW |
//!
//! Both inputs are expected to be pulled down by the HAL so a floating
//! (unwired) pin reads as "no presence".

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::SensorReader;
use crate::config::Pinout;
use crate::error::{Error, Result};

pub struct RadarSensor<P, A, G> {
    primary: P,
    alternate: A,
    ground: G,
    pinout: Pinout,
    last: bool,
}

impl<P: InputPin, A: InputPin, G: OutputPin> RadarSensor<P, A, G> {
    pub fn new(primary: P, alternate: A, ground: G, pinout: Pinout) -> Self {
        Self {
            primary,
            alternate,
            ground,
            pinout,
            last: false,
        }
    }

    /// Drive the alternate wiring's ground reference low.
    pub fn init(&mut self) -> Result<()> {
        self.ground.set_low().map_err(|_| Error::Gpio("ground reference"))
    }

    /// Sample the pin selected by the pinout.
    pub fn sample(&mut self) -> Result<bool> {
        let level = match self.pinout {
            Pinout::Primary => self.primary.is_high().map_err(|_| Error::Gpio("radar")),
            Pinout::Alternate => self.alternate.is_high().map_err(|_| Error::Gpio("alt radar")),
        }?;
        self.last = level;
        Ok(level)
    }

    /// Last successfully sampled level.
    pub fn last(&self) -> bool {
        self.last
    }

    pub fn pinout(&self) -> Pinout {
        self.pinout
    }
}

impl<P: InputPin, A: InputPin, G: OutputPin> SensorReader for RadarSensor<P, A, G> {
    fn configure(&mut self) {
        if let Err(e) = self.init() {
            warn!("radar: {}", e);
        }
    }

    /// A failed read counts as "no presence".
    fn read_presence(&mut self) -> bool {
        self.sample().unwrap_or_else(|e| {
            warn!("radar: {}", e);
            false
        })
    }
}
