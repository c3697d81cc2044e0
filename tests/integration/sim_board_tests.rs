//! End-to-end: Monitor over the real drivers with simulated peripherals.

use embedded_hal::delay::DelayNs;

use sleep_counter::adapters::hardware::HardwareAdapter;
use sleep_counter::adapters::log_sink::LogEventSink;
use sleep_counter::adapters::sim::{SimPin, SimPowerRail, SimPwm};
use sleep_counter::adapters::terminal_display::TerminalDisplay;
use sleep_counter::app::ports::PowerRail;
use sleep_counter::app::service::Monitor;
use sleep_counter::config::{MonitorConfig, Pinout};
use sleep_counter::drivers::status_led::{COLOUR_DETECTION, COLOUR_OFF, StatusLed};
use sleep_counter::events::{
    INPUT_QUEUE_DEPTH, InputEvent, InputKey, InputQueue, InputType, input_callback,
};
use sleep_counter::sensors::radar::RadarSensor;

/// Delay that returns immediately.
struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

type SimBoard = HardwareAdapter<
    RadarSensor<SimPin, SimPin, SimPin>,
    StatusLed<SimPwm, SimPwm, SimPwm>,
    SimPowerRail,
    TerminalDisplay<Vec<u8>>,
    NoDelay,
>;

struct Wires {
    primary: SimPin,
    alternate: SimPin,
    ground: SimPin,
    red: SimPwm,
}

fn sim_board(pinout: Pinout, rail: SimPowerRail) -> (SimBoard, Wires) {
    let wires = Wires {
        primary: SimPin::new(false),
        alternate: SimPin::new(false),
        ground: SimPin::new(true),
        red: SimPwm::new(),
    };
    let sensor = RadarSensor::new(
        wires.primary.clone(),
        wires.alternate.clone(),
        wires.ground.clone(),
        pinout,
    );
    let led = StatusLed::new(wires.red.clone(), SimPwm::new(), SimPwm::new());
    let board = HardwareAdapter::new(sensor, led, rail, TerminalDisplay::new(Vec::new()), NoDelay);
    (board, wires)
}

#[test]
fn alternate_wiring_counts_and_lights_led() {
    let queue = InputQueue::new();
    let (board, wires) = sim_board(Pinout::Alternate, SimPowerRail::new());
    let config = MonitorConfig {
        pinout: Pinout::Alternate,
        ..MonitorConfig::default()
    };
    let mut m = Monitor::new(config, board, LogEventSink::new(), &queue);
    m.start();

    assert!(!wires.ground.level(), "ground reference must be driven low");
    assert!(m.board().rail().is_enabled());

    wires.alternate.set_level(true);
    let _ = m.tick();
    assert_eq!(m.board().feedback().current_colour(), COLOUR_DETECTION);
    assert_eq!(wires.red.duty(), wires.red.max_duty());

    // Primary pin is not wired in this configuration.
    wires.alternate.set_level(false);
    wires.primary.set_level(true);
    let _ = m.tick();
    assert_eq!(m.board().feedback().current_colour(), COLOUR_OFF);

    wires.alternate.set_level(true);
    let _ = m.tick();
    assert_eq!(m.state().movement_count(), 2);
    assert_eq!(m.board().display().canvas().row(2).trim(), "Counter: 2");
}

#[test]
fn full_run_restores_hardware() {
    let queue = InputQueue::new();
    let (board, wires) = sim_board(Pinout::Primary, SimPowerRail::new());
    let config = MonitorConfig {
        pinout: Pinout::Primary,
        ..MonitorConfig::default()
    };
    wires.primary.set_level(true);
    assert!(queue.try_push(InputEvent::new(InputKey::Back, InputType::Press)));

    let mut m = Monitor::new(config, board, LogEventSink::new(), &queue);
    assert_eq!(m.run(), 1);

    let board = m.board();
    assert_eq!(board.feedback().current_colour(), COLOUR_OFF);
    assert_eq!(board.rail().disable_calls(), 1);
    assert!(!board.display().is_attached());
}

#[test]
fn foreign_rail_survives_full_run() {
    let queue = InputQueue::new();
    let (board, _wires) = sim_board(Pinout::Alternate, SimPowerRail::already_enabled());
    assert!(queue.try_push(InputEvent::new(InputKey::Back, InputType::Press)));

    let mut m = Monitor::new(MonitorConfig::default(), board, LogEventSink::new(), &queue);
    m.run();

    assert_eq!(m.board().rail().enable_calls(), 0);
    assert_eq!(m.board().rail().disable_calls(), 0);
}

#[test]
fn blocked_producer_resumes_when_consumer_drains() {
    let queue = InputQueue::new();
    let ev = InputEvent::new(InputKey::Up, InputType::Press);
    for _ in 0..INPUT_QUEUE_DEPTH {
        assert!(queue.try_push(ev));
    }

    std::thread::scope(|s| {
        let producer = s.spawn(|| {
            input_callback(&queue, InputEvent::new(InputKey::Back, InputType::Press));
        });

        let mut delay = NoDelay;
        let mut received = Vec::new();
        while received.len() < INPUT_QUEUE_DEPTH + 1 {
            if let Some(e) = queue.recv_timeout(1, &mut delay) {
                received.push(e);
            } else {
                std::thread::yield_now();
            }
        }

        producer.join().unwrap();
        assert!(received[..INPUT_QUEUE_DEPTH].iter().all(|e| *e == ev));
        assert!(received[INPUT_QUEUE_DEPTH].is_exit());
    });
}
