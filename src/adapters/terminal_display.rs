//! Terminal display adapter.
//!
//! Implements [`Display`] by running the draw routine into a
//! [`TextCanvas`] and writing the frame to any [`io::Write`] (stdout in
//! the simulator, a `Vec<u8>` in tests).  Identical consecutive snapshots
//! are not redrawn, so a 100 Hz loop only prints when something changed.

use std::io;

use log::{debug, warn};

use crate::app::ports::Display;
use crate::app::state::RenderState;
use crate::app::view;

use super::text_canvas::{COLUMNS, TextCanvas};

pub struct TerminalDisplay<W: io::Write> {
    out: W,
    canvas: TextCanvas,
    attached: bool,
    last: Option<RenderState>,
    frames: u32,
}

impl<W: io::Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            canvas: TextCanvas::new(),
            attached: false,
            last: None,
            frames: 0,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Frames actually drawn.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn canvas(&self) -> &TextCanvas {
        &self.canvas
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn write_frame(&mut self) -> io::Result<()> {
        let border = "-".repeat(COLUMNS);
        writeln!(self.out, "+{border}+")?;
        for row in self.canvas.rows() {
            writeln!(self.out, "|{row:<COLUMNS$}|")?;
        }
        writeln!(self.out, "+{border}+")?;
        self.out.flush()
    }
}

impl<W: io::Write> Display for TerminalDisplay<W> {
    fn attach(&mut self) {
        self.attached = true;
        self.last = None;
        debug!("display attached");
    }

    fn request_redraw(&mut self, state: RenderState) {
        if !self.attached || self.last == Some(state) {
            return;
        }
        view::draw(&mut self.canvas, &state);
        if let Err(e) = self.write_frame() {
            warn!("display: frame write failed: {}", e);
        }
        self.last = Some(state);
        self.frames += 1;
    }

    fn detach(&mut self) {
        self.attached = false;
        debug!("display detached after {} frame(s)", self.frames);
    }
}
