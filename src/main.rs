//! Sleep Counter: host simulator entry point.
//!
//! Stands in for the firmware app entry: same startup, loop and shutdown,
//! with simulated peripherals behind the same port traits.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                      │
//! │                                                              │
//! │  RadarSensor<SimPin>  StatusLed<SimPwm>  SimPowerRail        │
//! │  TerminalDisplay      StdDelay           LogEventSink        │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ─────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │          Monitor (latch · counter · view)          │      │
//! │  └────────────────────────────────────────────────────┘      │
//! │                                                              │
//! │  stdin thread ──input_callback──▶ INPUT_QUEUE ──▶ Monitor    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys (one per line on stdin): `1`/`m`/`+` radar high, `0`/`-` radar
//! low, `b`/`q` back, `u`/`d`/`l`/`r`/`o` other keys.
#![deny(unused_must_use)]

use std::io::BufRead;

use anyhow::{Context, Result};
use log::{info, warn};

use sleep_counter::adapters::hardware::HardwareAdapter;
use sleep_counter::adapters::log_sink::LogEventSink;
use sleep_counter::adapters::sim::{SimPin, SimPowerRail, SimPwm, StdDelay};
use sleep_counter::adapters::terminal_display::TerminalDisplay;
use sleep_counter::app::service::Monitor;
use sleep_counter::config::{MonitorConfig, Pinout};
use sleep_counter::drivers::status_led::StatusLed;
use sleep_counter::events::{InputEvent, InputKey, InputQueue, InputType, input_callback};
use sleep_counter::sensors::radar::RadarSensor;

/// The app's input queue.  Static so the input thread can outlive any borrow.
static INPUT_QUEUE: InputQueue = InputQueue::new();

/// What a line of stdin means.
enum Command {
    Radar(bool),
    Key(InputKey),
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "1" | "m" | "+" => Some(Command::Radar(true)),
        "0" | "-" => Some(Command::Radar(false)),
        "b" | "q" => Some(Command::Key(InputKey::Back)),
        "u" => Some(Command::Key(InputKey::Up)),
        "d" => Some(Command::Key(InputKey::Down)),
        "l" => Some(Command::Key(InputKey::Left)),
        "r" => Some(Command::Key(InputKey::Right)),
        "o" => Some(Command::Key(InputKey::Ok)),
        _ => None,
    }
}

/// Stand-in for the host's input thread plus the radar's OUT line.
fn spawn_input_thread(radar_wire: SimPin) -> Result<()> {
    std::thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                match parse_command(&line) {
                    Some(Command::Radar(high)) => radar_wire.set_level(high),
                    Some(Command::Key(key)) => {
                        input_callback(&INPUT_QUEUE, InputEvent::new(key, InputType::Press));
                        input_callback(&INPUT_QUEUE, InputEvent::new(key, InputType::Release));
                    }
                    None => warn!("unknown command {:?}", line.trim()),
                }
            }
            // stdin closed: leave the app like a user would
            input_callback(&INPUT_QUEUE, InputEvent::new(InputKey::Back, InputType::Press));
        })
        .context("spawning input thread")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    info!("Sleep Counter v{} (simulator)", env!("CARGO_PKG_VERSION"));

    let config = MonitorConfig::default();
    if let Err(msg) = config.validate() {
        anyhow::bail!("invalid config: {msg}");
    }

    // ── Peripherals ───────────────────────────────────────────
    let radar_pin = SimPin::new(false);
    let alt_radar_pin = SimPin::new(false);
    let alt_ground_pin = SimPin::new(true);
    let radar_wire = match config.pinout {
        Pinout::Primary => radar_pin.clone(),
        Pinout::Alternate => alt_radar_pin.clone(),
    };

    let sensor = RadarSensor::new(radar_pin, alt_radar_pin, alt_ground_pin, config.pinout);
    let led = StatusLed::new(SimPwm::new(), SimPwm::new(), SimPwm::new());
    let board = HardwareAdapter::new(
        sensor,
        led,
        SimPowerRail::new(),
        TerminalDisplay::new(std::io::stdout()),
        StdDelay,
    );

    spawn_input_thread(radar_wire)?;

    // ── Run ───────────────────────────────────────────────────
    let mut monitor = Monitor::new(config, board, LogEventSink::new(), &INPUT_QUEUE);
    let count = monitor.run();

    info!("Exited with {} detection(s)", count);
    Ok(())
}
