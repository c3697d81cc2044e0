//! Detection state: the latch, the counter, and the render snapshot.

/// What a single observation did to the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Inactive → active.  Counter was incremented.
    Rising,
    /// Active → inactive.
    Falling,
    /// No change in either direction.
    Steady,
}

/// Latch and counter owned by the monitor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionState {
    active: bool,
    alarming: bool,
    movement_count: u32,
}

impl DetectionState {
    pub const fn new() -> Self {
        Self {
            active: false,
            alarming: false,
            movement_count: 0,
        }
    }

    /// Feed one sensor reading through the latch.
    ///
    /// The counter only moves on a rising edge and wraps at `u32::MAX`.
    pub fn observe(&mut self, active: bool) -> Transition {
        self.active = active;
        match (active, self.alarming) {
            (true, false) => {
                self.movement_count = self.movement_count.wrapping_add(1);
                self.alarming = true;
                Transition::Rising
            }
            (false, true) => {
                self.alarming = false;
                Transition::Falling
            }
            _ => Transition::Steady,
        }
    }

    /// Last sensor reading.
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn alarming(&self) -> bool {
        self.alarming
    }

    pub fn movement_count(&self) -> u32 {
        self.movement_count
    }

    /// Immutable copy for the draw routine.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            movement_count: self.movement_count,
            alarming: self.alarming,
        }
    }
}

/// Everything the draw routine may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    pub movement_count: u32,
    pub alarming: bool,
}
