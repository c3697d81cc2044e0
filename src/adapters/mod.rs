//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter            | Implements            | Connects to                  |
//! |--------------------|-----------------------|------------------------------|
//! | `hardware`         | Board (all ports)     | one driver per port          |
//! | `log_sink`         | EventSink             | `log` facade                 |
//! | `terminal_display` | Display               | any `io::Write`              |
//! | `text_canvas`      | Canvas                | 21x8 character grid          |
//! | `sim`              | embedded-hal, PowerRail, DelayNs | host simulation   |

pub mod hardware;
pub mod log_sink;
pub mod sim;
pub mod terminal_display;
pub mod text_canvas;
