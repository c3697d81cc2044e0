//! Character-cell canvas.
//!
//! Maps the 128x64 px screen onto a 21x8 grid of 6x8 px cells, which is
//! close enough to the device's primary font to preview layout in a
//! terminal and to assert on in tests.  Text falling outside the grid is
//! clipped; non-ASCII characters are drawn as `?`.

use crate::app::ports::{Align, Canvas, Font};

pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;
const CELL_WIDTH: i32 = 6;
const CELL_HEIGHT: i32 = 8;

pub const COLUMNS: usize = (SCREEN_WIDTH / CELL_WIDTH) as usize;
pub const ROWS: usize = (SCREEN_HEIGHT / CELL_HEIGHT) as usize;

pub struct TextCanvas {
    cells: [[u8; COLUMNS]; ROWS],
    font: Font,
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCanvas {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS]; ROWS],
            font: Font::Primary,
        }
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// One row of cells, trailing blanks trimmed.
    pub fn row(&self, index: usize) -> &str {
        self.cells
            .get(index)
            .and_then(|row| core::str::from_utf8(row).ok())
            .map_or("", str::trim_end)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).map(|i| self.row(i))
    }

    fn put_line(&mut self, left_px: i32, top_px: i32, line: &str) {
        let row = top_px.div_euclid(CELL_HEIGHT);
        let Ok(row) = usize::try_from(row) else { return };
        let Some(cells) = self.cells.get_mut(row) else { return };

        let first_col = left_px.div_euclid(CELL_WIDTH);
        for (i, ch) in line.chars().enumerate() {
            let col = first_col + i as i32;
            let Ok(col) = usize::try_from(col) else { continue };
            if let Some(cell) = cells.get_mut(col) {
                *cell = if ch.is_ascii() && !ch.is_ascii_control() { ch as u8 } else { b'?' };
            }
        }
    }
}

impl Canvas for TextCanvas {
    fn clear(&mut self) {
        self.cells = [[b' '; COLUMNS]; ROWS];
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_text_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str) {
        let line_count = text.lines().count().max(1) as i32;
        let block_height = line_count * CELL_HEIGHT;
        let top = match vertical {
            Align::Bottom => y - block_height,
            Align::Center => y - block_height / 2,
            _ => y,
        };

        for (i, line) in text.lines().enumerate() {
            let width = line.chars().count() as i32 * CELL_WIDTH;
            let left = match horizontal {
                Align::Right => x - width,
                Align::Center => x - width / 2,
                _ => x,
            };
            self.put_line(left, top + i as i32 * CELL_HEIGHT, line);
        }
    }
}
