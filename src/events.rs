//! Input events and the bounded input queue.
//!
//! The host's input thread is the only producer; the monitor loop is the
//! only consumer.
//!
//! ```text
//! ┌──────────────┐  InputEvent   ┌──────────────┐   recv_timeout   ┌──────────────┐
//! │ Host input   │──────────────▶│  InputQueue  │─────────────────▶│  Monitor     │
//! │ thread       │ push_blocking │  (8 slots)   │  (10 ms poll)    │  loop        │
//! └──────────────┘               └──────────────┘                  └──────────────┘
//! ```
//!
//! The producer blocks while the queue is full.  Human input is slow
//! compared to a 100 Hz consumer, so this never stalls in practice.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::delay::DelayNs;

/// Queue depth, in events.
pub const INPUT_QUEUE_DEPTH: usize = 8;

/// Granularity of the consumer's timed wait.
const POLL_SLICE_MS: u32 = 1;

/// Physical keys on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
    Right,
    Left,
    Ok,
    Back,
}

/// What happened to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Key went down.
    Press,
    /// Key went up.
    Release,
    /// Press + release under the long-press threshold.
    Short,
    /// Held past the long-press threshold.
    Long,
    /// Auto-repeat while held.
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputType,
}

impl InputEvent {
    pub const fn new(key: InputKey, kind: InputType) -> Self {
        Self { key, kind }
    }

    /// A `Press` of `Back` ends the monitor loop.  Nothing else does.
    pub fn is_exit(&self) -> bool {
        self.kind == InputType::Press && self.key == InputKey::Back
    }
}

/// Bounded FIFO between the host input thread and the monitor loop.
pub struct InputQueue {
    channel: Channel<CriticalSectionRawMutex, InputEvent, INPUT_QUEUE_DEPTH>,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl InputQueue {
    pub const fn new() -> Self {
        Self { channel: Channel::new() }
    }

    /// Enqueue, waiting as long as it takes for a free slot.
    pub fn push_blocking(&self, event: InputEvent) {
        futures_lite::future::block_on(self.channel.send(event));
    }

    /// Enqueue without waiting.  Returns `false` if the queue is full.
    pub fn try_push(&self, event: InputEvent) -> bool {
        self.channel.try_send(event).is_ok()
    }

    /// Dequeue the oldest event, waiting up to `timeout_ms`.
    ///
    /// Waits in 1 ms slices on `delay`, so an event that arrives mid-wait is
    /// picked up within a millisecond.  A zero timeout checks exactly once.
    pub fn recv_timeout(&self, timeout_ms: u32, delay: &mut impl DelayNs) -> Option<InputEvent> {
        let mut waited_ms = 0;
        loop {
            if let Ok(event) = self.channel.try_receive() {
                return Some(event);
            }
            if waited_ms >= timeout_ms {
                return None;
            }
            delay.delay_ms(POLL_SLICE_MS);
            waited_ms += POLL_SLICE_MS;
        }
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

/// Input callback registered with the host's view port.
///
/// Forwards every event verbatim; blocks while the queue is full.
pub fn input_callback(queue: &InputQueue, event: InputEvent) {
    queue.push_blocking(event);
}
