//! Port traits: the hexagonal boundary between domain logic and the host.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Monitor (domain)
//! ```
//!
//! The host firmware supplies GPIO, the notification LED, the 5V rail and
//! the GUI.  Adapters wrap each of those behind the traits below, and the
//! [`Monitor`](super::service::Monitor) consumes them via generics, so the
//! loop never touches hardware directly and runs unmodified against mocks.
//!
//! Every port is infallible from the domain's point of view.  Adapters
//! absorb (and log) whatever their underlying drivers report.

use embedded_hal::delay::DelayNs;

use super::state::RenderState;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the presence radar.
pub trait SensorReader {
    /// Bring the sensor pins into their operating configuration.
    fn configure(&mut self);

    /// Sample the configured sensor pin.  `true` = presence.
    fn read_presence(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Feedback port (driven adapter: domain → notification LED)
// ───────────────────────────────────────────────────────────────

/// Visual feedback.  Both calls are fire-and-forget.
pub trait FeedbackIndicator {
    /// Solid red.
    fn engage(&mut self);

    /// Back to the idle LED state.
    fn disengage(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Power port
// ───────────────────────────────────────────────────────────────

/// The auxiliary 5V (OTG) output rail on the GPIO header.
pub trait PowerRail {
    fn is_enabled(&self) -> bool;

    /// Request the rail on.  May not take effect; check [`is_enabled`](Self::is_enabled).
    fn enable(&mut self);

    fn disable(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port
// ───────────────────────────────────────────────────────────────

/// Full-screen surface owned by the host GUI.
pub trait Display {
    /// Register the surface and its callbacks with the GUI.
    fn attach(&mut self);

    /// Schedule a redraw of `state`.  Must not block.
    fn request_redraw(&mut self, state: RenderState);

    /// Disable and unregister the surface.
    fn detach(&mut self);
}

/// Text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Primary,
    Secondary,
}

/// Drawing primitives handed to the draw routine.
pub trait Canvas {
    fn clear(&mut self);

    fn set_font(&mut self, font: Font);

    /// Draw `text` anchored at (`x`, `y`) in pixels.
    fn draw_text_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The monitor emits structured [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}

// ───────────────────────────────────────────────────────────────
// Board bundle
// ───────────────────────────────────────────────────────────────

/// Everything the monitor needs from the host in one value.
///
/// The delay source is the host's millisecond sleep.
pub trait Board: SensorReader + FeedbackIndicator + PowerRail + Display + DelayNs {}

impl<T> Board for T where T: SensorReader + FeedbackIndicator + PowerRail + Display + DelayNs {}
