//! RGB status LED driver.
//!
//! Three PWM channels drive the discrete R/G/B dies of the notification
//! LED.  Generic over [`SetDutyCycle`] so any HAL's PWM channel (or the
//! simulator's) can back it.
//!
//! Detection feedback is solid full-brightness red; releasing it turns
//! all three channels off.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::FeedbackIndicator;
use crate::error::{Error, Result};

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const COLOUR_DETECTION: Rgb = (255, 0, 0);
pub const COLOUR_OFF: Rgb = (0, 0, 0);

pub struct StatusLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    current: Rgb,
}

impl<R: SetDutyCycle, G: SetDutyCycle, B: SetDutyCycle> StatusLed<R, G, B> {
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self {
            red,
            green,
            blue,
            current: COLOUR_OFF,
        }
    }

    /// Set all three channels.  `current_colour` only changes on success.
    pub fn set_colour(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        self.red
            .set_duty_cycle_fraction(u16::from(r), 255)
            .map_err(|_| Error::Led("red"))?;
        self.green
            .set_duty_cycle_fraction(u16::from(g), 255)
            .map_err(|_| Error::Led("green"))?;
        self.blue
            .set_duty_cycle_fraction(u16::from(b), 255)
            .map_err(|_| Error::Led("blue"))?;
        self.current = (r, g, b);
        Ok(())
    }

    pub fn off(&mut self) -> Result<()> {
        let (r, g, b) = COLOUR_OFF;
        self.set_colour(r, g, b)
    }

    pub fn current_colour(&self) -> Rgb {
        self.current
    }
}

impl<R: SetDutyCycle, G: SetDutyCycle, B: SetDutyCycle> FeedbackIndicator for StatusLed<R, G, B> {
    fn engage(&mut self) {
        let (r, g, b) = COLOUR_DETECTION;
        if let Err(e) = self.set_colour(r, g, b) {
            warn!("status LED: {}", e);
        }
    }

    fn disengage(&mut self) {
        if let Err(e) = self.off() {
            warn!("status LED: {}", e);
        }
    }
}
