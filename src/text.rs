//! Text output on a grid of 8x8 character cells, one page tall each.

use crate::buffer::FrameBuffer;
use crate::command::consts::*;
use crate::error::OutOfRange;
use crate::font::Font;

/// Width in pixels of a character cell.
pub const GLYPH_WIDTH: u8 = 8;
/// Character rows on the panel, one per page.
pub const NUM_TEXT_ROWS: u8 = NUM_PAGES;
/// Character columns on the panel.
pub const NUM_TEXT_COLS: u8 = NUM_PIXEL_COLS / GLYPH_WIDTH;

/// The position the next character will be written at. Always inside the character grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    row: u8,
    col: u8,
}

impl Cursor {
    /// A cursor in the top left cell.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Move to character cell (`row`, `col`).
    pub fn set(&mut self, row: u8, col: u8) -> Result<(), OutOfRange> {
        if row >= NUM_TEXT_ROWS || col >= NUM_TEXT_COLS {
            return Err(OutOfRange);
        }
        self.row = row;
        self.col = col;
        Ok(())
    }

    /// Move to the start of the next row, wrapping from the last row to the first.
    pub fn newline(&mut self) {
        self.col = 0;
        self.next_row();
    }

    fn next_row(&mut self) {
        self.row = (self.row + 1) % NUM_TEXT_ROWS;
    }

    fn advance(&mut self) {
        self.col = (self.col + 1) % NUM_TEXT_COLS;
        if self.col == 0 {
            self.next_row();
        }
    }

    /// Draw `c` into the cell under the cursor and advance. The cell is overwritten entirely. A
    /// newline only moves the cursor, and characters beyond 7-bit ASCII are drawn as a space.
    pub fn write_char<F>(&mut self, fb: &mut FrameBuffer, font: &F, c: char)
    where
        F: Font + ?Sized,
    {
        if c == '\n' {
            self.newline();
            return;
        }
        let code = if c.is_ascii() { c as u8 } else { b' ' };
        let start = (self.col * GLYPH_WIDTH) as usize;
        fb.page_mut(self.row as usize)[start..start + GLYPH_WIDTH as usize]
            .copy_from_slice(&font.glyph(code));
        self.advance();
    }

    /// Write the first `n` characters of `s`, or all of it if it is shorter.
    pub fn write_string<F>(&mut self, fb: &mut FrameBuffer, font: &F, s: &str, n: usize)
    where
        F: Font + ?Sized,
    {
        for c in s.chars().take(n) {
            self.write_char(fb, font, c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Glyph, NUM_GLYPHS};

    /// A font where every glyph is its own code repeated, so cells can be told apart.
    fn code_font() -> [Glyph; NUM_GLYPHS] {
        let mut table = [[0u8; 8]; NUM_GLYPHS];
        for (code, glyph) in table.iter_mut().enumerate() {
            *glyph = [code as u8; 8];
        }
        table
    }

    fn cell(fb: &FrameBuffer, row: u8, col: u8) -> std::vec::Vec<u8> {
        (0..GLYPH_WIDTH)
            .map(|i| fb.get_byte(row, col * GLYPH_WIDTH + i).unwrap())
            .collect()
    }

    #[test]
    fn grid_bounds() {
        let mut cursor = Cursor::new();
        cursor.set(7, 15).unwrap();
        assert_eq!((cursor.row(), cursor.col()), (7, 15));
        assert_eq!(cursor.set(8, 0), Err(OutOfRange));
        assert_eq!(cursor.set(0, 16), Err(OutOfRange));
        assert_eq!((cursor.row(), cursor.col()), (7, 15));
    }

    #[test]
    fn glyph_round_trip() {
        let mut font = [[0u8; 8]; NUM_GLYPHS];
        font[b'A' as usize] = [0x7C, 0x12, 0x11, 0x12, 0x7C, 0x00, 0x00, 0x00];
        let mut fb = FrameBuffer::new();
        let mut cursor = Cursor::new();
        cursor.set(3, 5).unwrap();
        cursor.write_char(&mut fb, &font, 'A');
        assert_eq!(cell(&fb, 3, 5), font[b'A' as usize]);
        assert_eq!((cursor.row(), cursor.col()), (3, 6));
    }

    #[test]
    fn overwrites_cell() {
        let font = code_font();
        let mut fb = FrameBuffer::new();
        fb.fill_rect(
            crate::buffer::PixelCoord(0, 0),
            crate::buffer::PixelCoord(127, 63),
            true,
        )
        .unwrap();
        let mut cursor = Cursor::new();
        cursor.write_char(&mut fb, &font, '\0');
        assert_eq!(cell(&fb, 0, 0), [0; 8]);
        assert_eq!(cell(&fb, 0, 1), [0xFF; 8]);
    }

    #[test]
    fn newline() {
        let font = code_font();
        let mut fb = FrameBuffer::new();
        let mut cursor = Cursor::new();
        cursor.write_string(&mut fb, &font, "ab\ncd", 5);
        assert_eq!((cursor.row(), cursor.col()), (1, 2));
        assert_eq!(cell(&fb, 1, 0), [b'c'; 8]);
        assert_eq!(cell(&fb, 0, 2), [0; 8]);
    }

    #[test]
    fn non_ascii_is_space() {
        let font = code_font();
        let mut fb = FrameBuffer::new();
        let mut cursor = Cursor::new();
        cursor.write_char(&mut fb, &font, 'é');
        assert_eq!(cell(&fb, 0, 0), [b' '; 8]);
    }

    #[test]
    fn wraps_rows() {
        let font = code_font();
        let mut fb = FrameBuffer::new();
        let mut cursor = Cursor::new();
        cursor.write_string(&mut fb, &font, "0123456789abcdefXY", 18);
        assert_eq!(cell(&fb, 0, 15), [b'f'; 8]);
        assert_eq!(cell(&fb, 1, 0), [b'X'; 8]);
        assert_eq!(cell(&fb, 1, 1), [b'Y'; 8]);
        assert_eq!((cursor.row(), cursor.col()), (1, 2));
    }

    #[test]
    fn wraps_back_to_first_row() {
        let font = code_font();
        let mut fb = FrameBuffer::new();
        let mut cursor = Cursor::new();
        cursor.set(7, 15).unwrap();
        cursor.write_string(&mut fb, &font, "zq", 2);
        assert_eq!(cell(&fb, 7, 15), [b'z'; 8]);
        assert_eq!(cell(&fb, 0, 0), [b'q'; 8]);
        assert_eq!((cursor.row(), cursor.col()), (0, 1));

        cursor.set(7, 3).unwrap();
        cursor.write_char(&mut fb, &font, '\n');
        assert_eq!((cursor.row(), cursor.col()), (0, 0));
    }

    #[test]
    fn write_string_stops_at_n() {
        let font = code_font();
        let mut fb = FrameBuffer::new();
        let mut cursor = Cursor::new();
        cursor.write_string(&mut fb, &font, "hello", 2);
        assert_eq!((cursor.row(), cursor.col()), (0, 2));
        assert_eq!(cell(&fb, 0, 2), [0; 8]);
        cursor.write_string(&mut fb, &font, "hi", 10);
        assert_eq!((cursor.row(), cursor.col()), (0, 4));
    }
}
