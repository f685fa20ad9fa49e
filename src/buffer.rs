//! The in-memory copy of display RAM which all drawing goes into.
//!
//! The layout mirrors the controller's own: `NUM_PAGES` pages of `NUM_PIXEL_COLS` bytes, where
//! bit `n` of the byte at (`page`, `col`) is the pixel at column `col`, row `page * 8 + n`.

use crate::command::consts::*;
use crate::error::OutOfRange;

/// A pixel coordinate pair of `column` and `row`. `column` must be in the range [0,
/// `consts::PIXEL_COL_MAX`], and `row` must be in the range [0, `consts::PIXEL_ROW_MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelCoord(pub i16, pub i16);

impl PixelCoord {
    /// Whether the coordinate lies on the visible panel.
    pub fn on_screen(self) -> bool {
        self.0 >= 0
            && self.0 < NUM_PIXEL_COLS as i16
            && self.1 >= 0
            && self.1 < NUM_PIXEL_ROWS as i16
    }
}

pub type Page = [u8; NUM_PIXEL_COLS as usize];

/// A 1 bit per pixel framebuffer in the controller's page layout.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [Page; NUM_PAGES as usize],
}

impl FrameBuffer {
    /// Construct a framebuffer with every pixel off.
    pub fn new() -> Self {
        FrameBuffer {
            pages: [[0; NUM_PIXEL_COLS as usize]; NUM_PAGES as usize],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Turn every pixel on or off.
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            *page = [byte; NUM_PIXEL_COLS as usize];
        }
    }

    /// Read the byte holding column `col` of page `page`.
    pub fn get_byte(&self, page: u8, col: u8) -> Result<u8, OutOfRange> {
        self.pages
            .get(page as usize)
            .and_then(|p| p.get(col as usize))
            .copied()
            .ok_or(OutOfRange)
    }

    /// Overwrite the byte holding column `col` of page `page`.
    pub fn set_byte(&mut self, page: u8, col: u8, value: u8) -> Result<(), OutOfRange> {
        let byte = self
            .pages
            .get_mut(page as usize)
            .and_then(|p| p.get_mut(col as usize))
            .ok_or(OutOfRange)?;
        *byte = value;
        Ok(())
    }

    /// Read back a single pixel.
    pub fn pixel(&self, coord: PixelCoord) -> Result<bool, OutOfRange> {
        if !coord.on_screen() {
            return Err(OutOfRange);
        }
        let byte = self.get_byte((coord.1 / 8) as u8, coord.0 as u8)?;
        Ok(byte & (1 << (coord.1 % 8)) != 0)
    }

    /// One page of the framebuffer, in column order, ready to be written to display RAM.
    pub fn page(&self, page: u8) -> Result<&Page, OutOfRange> {
        self.pages.get(page as usize).ok_or(OutOfRange)
    }

    /// All pages, top to bottom.
    pub fn pages(&self) -> &[Page] {
        &self.pages[..]
    }

    pub(crate) fn page_mut(&mut self, page: usize) -> &mut Page {
        &mut self.pages[page]
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.pages.iter().map(|p| &p[..])).finish()
    }
}
