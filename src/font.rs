//! The glyph table used for text. No glyph data ships with the driver; any 8x8 font covering the
//! 7-bit character codes can be supplied.

/// Number of character codes a font must cover.
pub const NUM_GLYPHS: usize = 128;

/// An 8x8 glyph in the controller's column layout: byte `i` is pixel column `i` of the glyph, bit
/// `n` of it is pixel row `n`, bit 0 topmost. Tables in this layout are sometimes called
/// "transposed", since most published 8x8 fonts are stored row-major.
pub type Glyph = [u8; 8];

/// A source of glyphs for character codes 0x00-0x7F.
pub trait Font {
    /// The glyph for `code`, which is always below `NUM_GLYPHS`.
    fn glyph(&self, code: u8) -> Glyph;
}

impl Font for [Glyph; NUM_GLYPHS] {
    fn glyph(&self, code: u8) -> Glyph {
        self[code as usize % NUM_GLYPHS]
    }
}

impl<'a, F: Font + ?Sized> Font for &'a F {
    fn glyph(&self, code: u8) -> Glyph {
        (**self).glyph(code)
    }
}
