//! Monitor session, the hexagonal core.
//!
//! [`Monitor`] owns the detection state, the configuration, the board
//! adapter and the event sink.  It borrows the input queue, which the
//! caller owns so the host's input thread can reach it.
//!
//! ```text
//!  SensorReader ──▶ ┌────────────────────────┐ ──▶ FeedbackIndicator
//!                   │        Monitor         │ ──▶ Display
//!    InputQueue ──▶ │  latch · counter       │ ──▶ EventSink
//!                   └────────────────────────┘
//! ```

use core::ops::ControlFlow;

use log::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::events::InputQueue;
use crate::power::{self, RailLease};

use super::events::MonitorEvent;
use super::ports::{Board, EventSink};
use super::state::{DetectionState, Transition};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    /// `start` has begun acquiring hardware but has not finished.
    Starting,
    Running,
    Stopped,
}

/// One run of the presence monitor.
///
/// Shutdown runs exactly once: explicitly via [`shutdown`](Self::shutdown)
/// or [`run`](Self::run), or on drop if the session was started and never
/// stopped.  A startup that panics partway is undone on drop as well; only
/// what was actually acquired gets released.
pub struct Monitor<'q, B: Board, S: EventSink> {
    config: MonitorConfig,
    board: B,
    sink: S,
    queue: &'q InputQueue,
    state: DetectionState,
    rail: Option<RailLease>,
    attached: bool,
    phase: Phase,
    ticks: u64,
}

impl<'q, B: Board, S: EventSink> Monitor<'q, B, S> {
    /// Construct the session.  Touches no hardware; call [`start`](Self::start)
    /// or [`run`](Self::run) next.
    ///
    /// Config values that [`MonitorConfig::validate`] rejects are replaced by
    /// their defaults.
    pub fn new(config: MonitorConfig, board: B, sink: S, queue: &'q InputQueue) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(reason) => {
                warn!("Invalid monitor config ({}); using defaults for rejected fields", reason);
                config.sanitized()
            }
        };

        Self {
            config,
            board,
            sink,
            queue,
            state: DetectionState::new(),
            rail: None,
            attached: false,
            phase: Phase::Created,
            ticks: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Attach the display, configure the pins, bring up the 5V rail.
    ///
    /// A rail that will not come up is logged and otherwise ignored.
    pub fn start(&mut self) {
        if self.phase != Phase::Created {
            return;
        }
        self.phase = Phase::Starting;

        self.board.attach();
        self.attached = true;
        self.board.request_redraw(self.state.snapshot());

        self.board.configure();
        info!(
            "Radar on {} ({:?} pinout)",
            self.config.pinout.sensor_pin(),
            self.config.pinout
        );

        let lease = RailLease::observe(&self.board);
        self.rail = Some(lease);
        match power::enable_with_retry(
            &mut self.board,
            self.config.otg_enable_attempts,
            self.config.otg_retry_delay_ms,
        ) {
            Ok(0) => info!("5V rail already enabled"),
            Ok(n) => info!("5V rail enabled after {} attempt(s)", n),
            // A failed enable has spent every attempt.
            Err(e) => {
                warn!("{}; continuing without confirmed sensor power", e);
                self.sink.emit(&MonitorEvent::RailUnavailable {
                    attempts: self.config.otg_enable_attempts,
                });
            }
        }
        self.phase = Phase::Running;

        self.sink.emit(&MonitorEvent::Started {
            pinout: self.config.pinout,
            rail_was_enabled: lease.was_enabled(),
        });
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// One loop iteration: read → react → poll input → redraw.
    ///
    /// Returns `Break` when the back key was pressed; the redraw is skipped
    /// on that tick.  Outside [`Phase::Running`] it returns `Break` without
    /// touching the board.
    pub fn tick(&mut self) -> ControlFlow<()> {
        if self.phase != Phase::Running {
            return ControlFlow::Break(());
        }
        self.ticks += 1;

        // 1. Sample the radar
        let active = self.board.read_presence();

        // 2. Edge-triggered feedback
        match self.state.observe(active) {
            Transition::Rising => {
                self.board.engage();
                let count = self.state.movement_count();
                debug!("Presence detected (count={})", count);
                self.sink.emit(&MonitorEvent::PresenceDetected { count });
            }
            Transition::Falling => {
                self.board.disengage();
                debug!("Presence cleared");
                self.sink.emit(&MonitorEvent::PresenceCleared {
                    count: self.state.movement_count(),
                });
            }
            Transition::Steady => {}
        }

        // 3. Input poll; its timeout paces the loop
        if let Some(event) = self
            .queue
            .recv_timeout(self.config.poll_interval_ms, &mut self.board)
        {
            if event.is_exit() {
                info!("Back pressed, exiting");
                self.sink.emit(&MonitorEvent::ExitRequested);
                return ControlFlow::Break(());
            }
            debug!("Ignoring input {:?}", event);
        }

        // 4. Hand the display a snapshot
        self.board.request_redraw(self.state.snapshot());
        ControlFlow::Continue(())
    }

    /// Start (if needed), tick until the back key, then shut down.
    ///
    /// Returns the final detection count.
    pub fn run(&mut self) -> u32 {
        self.start();
        while self.phase == Phase::Running {
            if self.tick().is_break() {
                break;
            }
        }
        self.shutdown();
        self.state.movement_count()
    }

    /// LED off, 5V rail back to its prior state, display detached.
    ///
    /// Idempotent; a session that never started has nothing to undo.  After
    /// a partial startup only the surface and rail actually acquired are
    /// released.
    pub fn shutdown(&mut self) {
        match self.phase {
            Phase::Created | Phase::Stopped => {
                self.phase = Phase::Stopped;
                return;
            }
            Phase::Starting => warn!("Startup did not complete; undoing partial startup"),
            Phase::Running => {}
        }

        self.board.disengage();
        if let Some(lease) = self.rail.take() {
            lease.release(&mut self.board);
        }
        if self.attached {
            self.board.detach();
            self.attached = false;
        }
        self.phase = Phase::Stopped;

        let count = self.state.movement_count();
        info!("Monitor stopped after {} tick(s), {} detection(s)", self.ticks, count);
        self.sink.emit(&MonitorEvent::Stopped {
            count,
            ticks: self.ticks,
        });
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &DetectionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Loop iterations executed so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<B: Board, S: EventSink> Drop for Monitor<'_, B, S> {
    fn drop(&mut self) {
        if matches!(self.phase, Phase::Starting | Phase::Running) {
            warn!("Monitor dropped while {:?}; shutting down", self.phase);
            self.shutdown();
        }
    }
}
