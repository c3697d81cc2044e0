//! The single screen: title plus detection counter.

use core::fmt::Write;

use heapless::String;

use super::ports::{Align, Canvas, Font};
use super::state::RenderState;

pub const TITLE: &str = "Sleep Counter";

/// Horizontal centre of the 128 px wide screen.
const CENTER_X: i32 = 64;
const TITLE_Y: i32 = 2;
const COUNTER_Y: i32 = 20;

/// `"Counter: <n>"` in a fixed 32-byte buffer.
pub fn counter_text(count: u32) -> String<32> {
    let mut text = String::new();
    // "Counter: " + at most 10 digits always fits.
    let _ = write!(text, "Counter: {}", count);
    text
}

/// Draw routine.  Reads only the snapshot, never live state.
pub fn draw(canvas: &mut impl Canvas, state: &RenderState) {
    canvas.clear();
    canvas.set_font(Font::Primary);
    canvas.draw_text_aligned(CENTER_X, TITLE_Y, Align::Center, Align::Top, TITLE);
    canvas.draw_text_aligned(
        CENTER_X,
        COUNTER_Y,
        Align::Center,
        Align::Top,
        &counter_text(state.movement_count),
    );
}
