//! Simulated peripherals for the host build and tests.
//!
//! Each type implements the same `embedded-hal` traits (or port trait) a
//! real HAL would, backed by shared atomics so a test or the simulator's
//! stdin thread can flip levels while the monitor owns the peripheral.

use core::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use log::debug;

use crate::app::ports::PowerRail;

// ── GPIO ──────────────────────────────────────────────────────

/// A GPIO line.  Clones share the level, so one clone can act as the
/// "wire" driving another clone used as an input.
#[derive(Debug, Clone)]
pub struct SimPin {
    level: Arc<AtomicBool>,
}

impl SimPin {
    pub fn new(high: bool) -> Self {
        Self {
            level: Arc::new(AtomicBool::new(high)),
        }
    }

    pub fn level(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }

    pub fn set_level(&self, high: bool) {
        self.level.store(high, Ordering::Release);
    }
}

impl digital::ErrorType for SimPin {
    type Error = Infallible;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level())
    }
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(true);
        Ok(())
    }
}

// ── PWM ───────────────────────────────────────────────────────

const SIM_PWM_MAX_DUTY: u16 = 1000;

/// A PWM channel.  Clones share the duty register.
#[derive(Debug, Clone)]
pub struct SimPwm {
    duty: Arc<AtomicU16>,
}

impl Default for SimPwm {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPwm {
    pub fn new() -> Self {
        Self {
            duty: Arc::new(AtomicU16::new(0)),
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.load(Ordering::Acquire)
    }

    pub fn max_duty(&self) -> u16 {
        SIM_PWM_MAX_DUTY
    }
}

impl pwm::ErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        SIM_PWM_MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.store(duty.min(SIM_PWM_MAX_DUTY), Ordering::Release);
        Ok(())
    }
}

// ── 5V rail ───────────────────────────────────────────────────

/// OTG rail.  Can start enabled (another app turned it on) or reject a
/// number of enable requests before coming up.
#[derive(Debug, Default)]
pub struct SimPowerRail {
    enabled: bool,
    reject_remaining: u8,
    enable_calls: u32,
    disable_calls: u32,
}

impl SimPowerRail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rail that is already on before the monitor starts.
    pub fn already_enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Rail that ignores the first `count` enable requests.
    pub fn rejecting(count: u8) -> Self {
        Self {
            reject_remaining: count,
            ..Self::default()
        }
    }

    pub fn enable_calls(&self) -> u32 {
        self.enable_calls
    }

    pub fn disable_calls(&self) -> u32 {
        self.disable_calls
    }
}

impl PowerRail for SimPowerRail {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn enable(&mut self) {
        self.enable_calls += 1;
        if self.reject_remaining > 0 {
            self.reject_remaining -= 1;
            debug!("sim rail: enable request ignored");
        } else {
            self.enabled = true;
        }
    }

    fn disable(&mut self) {
        self.disable_calls += 1;
        self.enabled = false;
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// Real-time delay on the host thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
