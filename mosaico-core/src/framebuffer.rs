//! Monochrome frame buffer for the 128x64 OLED
//!
//! Pixels are stored the way the SSD1306 consumes them in horizontal
//! addressing mode: eight pages of 128 column bytes, bit 0 of each byte
//! at the top of its page. Text drawing is per-pixel, so rows do not have
//! to be page-aligned (the status lines sit at y = 0, 15 and 30).

use crate::font::{self, CELL_WIDTH, GLYPH_COLS};

/// Display width in pixels.
pub const WIDTH: usize = 128;
/// Display height in pixels.
pub const HEIGHT: usize = 64;
/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;
/// Raw buffer length in bytes.
pub const BUF_LEN: usize = WIDTH * PAGES;

/// In-memory pixel state, mirrored to the panel on flush.
pub struct FrameBuffer {
    buf: [u8; BUF_LEN],
}

impl FrameBuffer {
    /// Create a buffer with every pixel off.
    pub const fn new() -> Self {
        Self { buf: [0; BUF_LEN] }
    }

    /// Set every pixel on or off.
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        self.buf.fill(value);
    }

    /// Set a single pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let byte = (y / 8) * WIDTH + x;
        let mask = 1 << (y % 8);
        if on {
            self.buf[byte] |= mask;
        } else {
            self.buf[byte] &= !mask;
        }
    }

    /// Draw one character cell with its top-left corner at (x, y).
    ///
    /// The full 8x8 cell is written, on and off pixels alike, so text
    /// redrawn over old text needs no separate erase.
    pub fn draw_char(&mut self, x: usize, y: usize, c: char) {
        let glyph = font::glyph(c);
        for dx in 0..CELL_WIDTH {
            let col = if dx < GLYPH_COLS { glyph[dx] } else { 0 };
            for dy in 0..8 {
                self.set_pixel(x + dx, y + dy, col & (1 << dy) != 0);
            }
        }
    }

    /// Draw a string left to right from (x, y), advancing one cell per
    /// character and stopping before a cell that would cross the right
    /// edge.
    pub fn draw_string(&mut self, x: usize, y: usize, text: &str) {
        let mut x = x;
        for c in text.chars() {
            if x + CELL_WIDTH > WIDTH {
                break;
            }
            self.draw_char(x, y, c);
            x += CELL_WIDTH;
        }
    }

    /// Raw page-major bytes, ready for the panel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_5X7;

    #[test]
    fn fill_reaches_every_byte() {
        let mut fb = FrameBuffer::new();
        fb.fill(true);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
        fb.fill(false);
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn set_pixel_uses_page_addressing() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, true);
        assert_eq!(fb.as_bytes()[0], 0x01);

        fb.set_pixel(5, 12, true); // page 1, bit 4
        assert_eq!(fb.as_bytes()[WIDTH + 5], 0x10);

        fb.set_pixel(127, 63, true); // last byte, top bit
        assert_eq!(fb.as_bytes()[BUF_LEN - 1], 0x80);

        fb.set_pixel(5, 12, false);
        assert_eq!(fb.as_bytes()[WIDTH + 5], 0x00);
    }

    #[test]
    fn out_of_range_pixels_are_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(WIDTH, 0, true);
        fb.set_pixel(0, HEIGHT, true);
        fb.set_pixel(usize::MAX, usize::MAX, true);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn page_aligned_char_lands_as_glyph_columns() {
        // At a page-aligned y the cell bytes equal the font columns.
        let mut fb = FrameBuffer::new();
        fb.draw_char(0, 0, 'A');
        let glyph = &FONT_5X7[('A' as usize) - 0x20];
        assert_eq!(&fb.as_bytes()[0..5], glyph);
        assert_eq!(&fb.as_bytes()[5..8], &[0, 0, 0]);
    }

    #[test]
    fn char_cells_are_opaque() {
        let mut fb = FrameBuffer::new();
        fb.fill(true);
        fb.draw_char(0, 0, ' ');
        assert_eq!(&fb.as_bytes()[0..8], &[0u8; 8]);
        assert_eq!(fb.as_bytes()[8], 0xFF); // next cell untouched
    }

    #[test]
    fn unaligned_char_straddles_two_pages() {
        // '|' is a single full-height column at dx = 2. Drawn at y = 4 it
        // covers rows 4-10: bits 4-7 of page 0 and bits 0-2 of page 1.
        let mut fb = FrameBuffer::new();
        fb.draw_char(0, 4, '|');
        assert_eq!(fb.as_bytes()[2], 0xF0);
        assert_eq!(fb.as_bytes()[WIDTH + 2], 0x07);
        assert_eq!(fb.as_bytes()[0], 0x00);
        assert_eq!(fb.as_bytes()[WIDTH + 3], 0x00);
    }

    #[test]
    fn strings_advance_one_cell_per_char() {
        let mut fb = FrameBuffer::new();
        fb.draw_string(0, 0, "Hi");
        let h = &FONT_5X7[('H' as usize) - 0x20];
        let i = &FONT_5X7[('i' as usize) - 0x20];
        assert_eq!(&fb.as_bytes()[0..5], h);
        assert_eq!(&fb.as_bytes()[8..13], i);
        assert_eq!(&fb.as_bytes()[5..8], &[0, 0, 0]);
    }

    #[test]
    fn strings_stop_at_the_right_edge() {
        let mut fb = FrameBuffer::new();
        fb.draw_string(WIDTH - CELL_WIDTH, 0, "ab");
        let a = &FONT_5X7[('a' as usize) - 0x20];
        assert_eq!(&fb.as_bytes()[WIDTH - 8..WIDTH - 3], a);

        // One pixel further and not even the first cell fits.
        let mut fb = FrameBuffer::new();
        fb.draw_string(WIDTH - CELL_WIDTH + 1, 0, "ab");
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn ten_cells_put_the_next_char_at_column_80() {
        // "Caractere " is ten characters; the echoed char starts at x = 80.
        let mut fb = FrameBuffer::new();
        fb.draw_string(0, 0, "Caractere ");
        fb.draw_char(80, 0, '7');
        let seven = &FONT_5X7[('7' as usize) - 0x20];
        assert_eq!(&fb.as_bytes()[80..85], seven);
    }
}
