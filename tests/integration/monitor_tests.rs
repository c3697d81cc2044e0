//! Integration tests for the Monitor read → react → poll → redraw loop.

use super::mock_hw::{BoardCall, MockBoard, RecordingSink, count, feedback_calls, redraws};

use sleep_counter::app::events::MonitorEvent;
use sleep_counter::app::service::{Monitor, Phase};
use sleep_counter::app::state::RenderState;
use sleep_counter::config::{MonitorConfig, Pinout};
use sleep_counter::events::{InputEvent, InputKey, InputQueue, InputType};

const BACK_PRESS: InputEvent = InputEvent::new(InputKey::Back, InputType::Press);

fn monitor(board: MockBoard, queue: &InputQueue) -> Monitor<'_, MockBoard, RecordingSink> {
    Monitor::new(MonitorConfig::default(), board, RecordingSink::new(), queue)
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn startup_attaches_display_before_configuring_pins_and_rail() {
    let queue = InputQueue::new();
    let board = MockBoard::new(&[]);
    let log = board.log();
    let mut m = monitor(board, &queue);

    m.start();

    assert_eq!(m.phase(), Phase::Running);
    assert_eq!(
        *log.borrow(),
        vec![
            BoardCall::Attach,
            BoardCall::Redraw(RenderState::default()),
            BoardCall::Configure,
            BoardCall::EnableRail,
        ]
    );
    assert_eq!(
        m.sink().events,
        vec![MonitorEvent::Started {
            pinout: m.config().pinout,
            rail_was_enabled: false,
        }]
    );
}

#[test]
fn start_twice_is_a_no_op() {
    let queue = InputQueue::new();
    let board = MockBoard::new(&[]);
    let log = board.log();
    let mut m = monitor(board, &queue);
    m.start();
    let after_first = log.borrow().len();
    m.start();
    assert_eq!(log.borrow().len(), after_first);
}

#[test]
fn configured_pinout_is_reported() {
    let queue = InputQueue::new();
    let config = MonitorConfig {
        pinout: Pinout::Primary,
        ..MonitorConfig::default()
    };
    let mut m = Monitor::new(config, MockBoard::new(&[]), RecordingSink::new(), &queue);
    m.start();
    assert!(matches!(
        m.sink().events[0],
        MonitorEvent::Started { pinout: Pinout::Primary, .. }
    ));
}

// ── Counting ──────────────────────────────────────────────────

#[test]
fn counter_progression_follows_rising_edges() {
    let queue = InputQueue::new();
    let mut m = monitor(MockBoard::from_bits(&[0, 0, 1, 1, 0, 1, 0, 0, 1]), &queue);
    m.start();

    let progression: Vec<u32> = (0..9)
        .map(|_| {
            assert!(m.tick().is_continue());
            m.state().movement_count()
        })
        .collect();

    assert_eq!(progression, vec![0, 0, 1, 1, 1, 2, 2, 2, 3]);
}

#[test]
fn alarming_mirrors_latest_reading() {
    let queue = InputQueue::new();
    let bits = [1, 1, 0, 1, 0, 0];
    let mut m = monitor(MockBoard::from_bits(&bits), &queue);
    m.start();
    for &bit in &bits {
        let _ = m.tick();
        assert_eq!(m.state().alarming(), bit != 0);
        assert_eq!(m.state().active(), bit != 0);
    }
}

#[test]
fn led_toggles_once_per_transition() {
    let queue = InputQueue::new();
    let board = MockBoard::from_bits(&[1, 1, 1, 0, 0, 1, 0]);
    let log = board.log();
    let mut m = monitor(board, &queue);
    m.start();
    for _ in 0..7 {
        let _ = m.tick();
    }

    assert_eq!(
        feedback_calls(&log),
        vec![
            BoardCall::Engage,
            BoardCall::Disengage,
            BoardCall::Engage,
            BoardCall::Disengage,
        ]
    );
}

#[test]
fn detection_events_carry_running_count() {
    let queue = InputQueue::new();
    let mut m = monitor(MockBoard::from_bits(&[1, 0, 1]), &queue);
    m.start();
    for _ in 0..3 {
        let _ = m.tick();
    }
    assert_eq!(
        m.sink().events[1..],
        [
            MonitorEvent::PresenceDetected { count: 1 },
            MonitorEvent::PresenceCleared { count: 1 },
            MonitorEvent::PresenceDetected { count: 2 },
        ]
    );
}

// ── Rendering ─────────────────────────────────────────────────

#[test]
fn each_tick_redraws_current_snapshot() {
    let queue = InputQueue::new();
    let board = MockBoard::from_bits(&[1, 0]);
    let log = board.log();
    let mut m = monitor(board, &queue);
    m.start();
    let _ = m.tick();
    let _ = m.tick();

    assert_eq!(
        redraws(&log),
        vec![
            RenderState::default(),
            RenderState { movement_count: 1, alarming: true },
            RenderState { movement_count: 1, alarming: false },
        ]
    );
}

#[test]
fn redraw_does_not_touch_state() {
    let queue = InputQueue::new();
    let mut m = monitor(MockBoard::from_bits(&[1]), &queue);
    m.start();
    let _ = m.tick();
    let before = *m.state();

    use sleep_counter::app::ports::Display;
    m.board_mut().request_redraw(before.snapshot());
    m.board_mut().request_redraw(before.snapshot());

    assert_eq!(*m.state(), before);
}

// ── Input handling ────────────────────────────────────────────

#[test]
fn tick_waits_poll_interval_when_no_input() {
    let queue = InputQueue::new();
    let mut m = monitor(MockBoard::new(&[]).with_rail_enabled(), &queue);
    m.start();
    let _ = m.tick();
    assert_eq!(m.board().delayed_ns, 10_000_000);
}

#[test]
fn zero_poll_interval_falls_back_to_default() {
    let queue = InputQueue::new();
    let config = MonitorConfig { poll_interval_ms: 0, ..MonitorConfig::default() };
    let mut m = Monitor::new(config, MockBoard::new(&[]).with_rail_enabled(), RecordingSink::new(), &queue);
    assert_eq!(m.config().poll_interval_ms, 10);

    m.start();
    let _ = m.tick();
    assert_eq!(m.board().delayed_ns, 10_000_000);
}

#[test]
fn back_press_ends_run_within_one_tick() {
    let queue = InputQueue::new();
    assert!(queue.try_push(BACK_PRESS));
    let board = MockBoard::from_bits(&[1, 1, 1]).with_rail_enabled();
    let log = board.log();
    let mut m = monitor(board, &queue);

    let count = m.run();

    assert_eq!(count, 1);
    assert_eq!(m.tick_count(), 1);
    assert_eq!(m.phase(), Phase::Stopped);
    // Event was already pending: no poll wait at all.
    assert_eq!(m.board().delayed_ns, 0);
    // Engaged on the rising edge, released by shutdown.
    assert_eq!(feedback_calls(&log), vec![BoardCall::Engage, BoardCall::Disengage]);
}

#[test]
fn exit_tick_skips_redraw() {
    let queue = InputQueue::new();
    assert!(queue.try_push(BACK_PRESS));
    let board = MockBoard::new(&[]);
    let log = board.log();
    let mut m = monitor(board, &queue);
    m.start();
    assert!(m.tick().is_break());
    // Only the initial redraw from startup.
    assert_eq!(redraws(&log).len(), 1);
}

#[test]
fn other_input_is_ignored() {
    let queue = InputQueue::new();
    for event in [
        InputEvent::new(InputKey::Ok, InputType::Press),
        InputEvent::new(InputKey::Back, InputType::Release),
        InputEvent::new(InputKey::Back, InputType::Long),
        BACK_PRESS,
    ] {
        assert!(queue.try_push(event));
    }
    let mut m = monitor(MockBoard::new(&[]), &queue);

    m.run();

    assert_eq!(m.tick_count(), 4);
    assert!(queue.is_empty());
}

#[test]
fn run_emits_exit_and_stop_events() {
    let queue = InputQueue::new();
    assert!(queue.try_push(InputEvent::new(InputKey::Up, InputType::Press)));
    assert!(queue.try_push(BACK_PRESS));
    let board = MockBoard::from_bits(&[1, 0]);
    let log = board.log();
    let mut m = monitor(board, &queue);

    m.run();

    let events = &m.sink().events;
    assert_eq!(events[events.len() - 2], MonitorEvent::ExitRequested);
    assert_eq!(events[events.len() - 1], MonitorEvent::Stopped { count: 1, ticks: 2 });
    assert_eq!(count(&log, &BoardCall::Detach), 1);
}
