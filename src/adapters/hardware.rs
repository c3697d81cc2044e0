//! Hardware adapter: bridges concrete peripherals to the domain ports.
//!
//! Combines one implementation of each port into a single value that
//! satisfies [`Board`](crate::app::ports::Board).  On the device the slots
//! hold HAL-backed drivers ([`RadarSensor`](crate::sensors::radar::RadarSensor),
//! [`StatusLed`](crate::drivers::status_led::StatusLed)) plus the host's
//! rail, GUI and delay services; on the host they hold the `sim` types.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{Display, FeedbackIndicator, PowerRail, SensorReader};
use crate::app::state::RenderState;

/// Concrete adapter that combines all host services behind port traits.
pub struct HardwareAdapter<S, F, P, V, D> {
    sensor: S,
    feedback: F,
    rail: P,
    display: V,
    delay: D,
}

impl<S, F, P, V, D> HardwareAdapter<S, F, P, V, D> {
    pub fn new(sensor: S, feedback: F, rail: P, display: V, delay: D) -> Self {
        Self {
            sensor,
            feedback,
            rail,
            display,
            delay,
        }
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn rail(&self) -> &P {
        &self.rail
    }

    pub fn display(&self) -> &V {
        &self.display
    }
}

// ── SensorReader ──────────────────────────────────────────────

impl<S: SensorReader, F, P, V, D> SensorReader for HardwareAdapter<S, F, P, V, D> {
    fn configure(&mut self) {
        self.sensor.configure();
    }

    fn read_presence(&mut self) -> bool {
        self.sensor.read_presence()
    }
}

// ── FeedbackIndicator ─────────────────────────────────────────

impl<S, F: FeedbackIndicator, P, V, D> FeedbackIndicator for HardwareAdapter<S, F, P, V, D> {
    fn engage(&mut self) {
        self.feedback.engage();
    }

    fn disengage(&mut self) {
        self.feedback.disengage();
    }
}

// ── PowerRail ─────────────────────────────────────────────────

impl<S, F, P: PowerRail, V, D> PowerRail for HardwareAdapter<S, F, P, V, D> {
    fn is_enabled(&self) -> bool {
        self.rail.is_enabled()
    }

    fn enable(&mut self) {
        self.rail.enable();
    }

    fn disable(&mut self) {
        self.rail.disable();
    }
}

// ── Display ───────────────────────────────────────────────────

impl<S, F, P, V: Display, D> Display for HardwareAdapter<S, F, P, V, D> {
    fn attach(&mut self) {
        self.display.attach();
    }

    fn request_redraw(&mut self, state: RenderState) {
        self.display.request_redraw(state);
    }

    fn detach(&mut self) {
        self.display.detach();
    }
}

// ── DelayNs ───────────────────────────────────────────────────

impl<S, F, P, V, D: DelayNs> DelayNs for HardwareAdapter<S, F, P, V, D> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
