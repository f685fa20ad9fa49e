//! Rasterization of points, lines and filled rectangles into a `FrameBuffer`.
//!
//! Every operation checks its coordinates against the visible panel before touching the buffer,
//! so a failed call leaves the buffer exactly as it was.

use itertools::iproduct;

use crate::buffer::{FrameBuffer, PixelCoord};
use crate::error::OutOfRange;

/// The byte pattern a rectangle spanning rows `top..=bottom` contributes to `page`: a run of set
/// bits from the first of those rows inside the page to the last.
fn page_mask(page: i16, top: i16, bottom: i16) -> u8 {
    let first = if page == top / 8 { top % 8 } else { 0 };
    let last = if page == bottom / 8 { bottom % 8 } else { 7 };
    (0xFF << first) & (0xFF >> (7 - last))
}

impl FrameBuffer {
    /// Turn the pixel at `coord` on or off, leaving the other pixels sharing its byte untouched.
    pub fn set_pixel(&mut self, coord: PixelCoord, on: bool) -> Result<(), OutOfRange> {
        if !coord.on_screen() {
            return Err(OutOfRange);
        }
        self.plot(coord.0, coord.1, on);
        Ok(())
    }

    /// Callers only pass on-screen coordinates: the line stepper truncates toward zero between two
    /// on-screen endpoints. Anything else is ignored rather than indexed.
    fn plot(&mut self, x: i16, y: i16, on: bool) {
        if !PixelCoord(x, y).on_screen() {
            return;
        }
        let byte = &mut self.page_mut((y / 8) as usize)[x as usize];
        let bit = 1 << (y % 8);
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Draw a straight line between `from` and `to`, both inclusive.
    ///
    /// The axis with the larger extent is stepped one pixel at a time, in increasing order no
    /// matter which endpoint comes first, while the other coordinate accumulates the slope and is
    /// truncated to a whole pixel at each step.
    pub fn draw_line(&mut self, from: PixelCoord, to: PixelCoord, on: bool) -> Result<(), OutOfRange> {
        if !from.on_screen() || !to.on_screen() {
            return Err(OutOfRange);
        }
        let (dx, dy) = ((to.0 - from.0).abs(), (to.1 - from.1).abs());

        if dx > dy {
            let slope = f64::from(to.1 - from.1) / f64::from(to.0 - from.0);
            let (start, end) = if from.0 <= to.0 { (from, to) } else { (to, from) };
            let mut y = f64::from(start.1);
            for x in start.0..=end.0 {
                self.plot(x, y as i16, on);
                y += slope;
            }
        } else {
            // A single point has no slope at all.
            let slope = if dy == 0 {
                0.0
            } else {
                f64::from(to.0 - from.0) / f64::from(to.1 - from.1)
            };
            let (start, end) = if from.1 <= to.1 { (from, to) } else { (to, from) };
            let mut x = f64::from(start.0);
            for y in start.1..=end.1 {
                self.plot(x as i16, y, on);
                x += slope;
            }
        }
        Ok(())
    }

    /// Fill the rectangle with opposite corners `corner_a` and `corner_b`, both inclusive. The
    /// corners may be given in any order.
    ///
    /// Each touched byte is overwritten as a whole: with `on`, the rows of the rectangle falling in
    /// that byte are set and its other rows cleared; without `on`, the complement is written. Rows
    /// outside the rectangle but sharing a page with its top or bottom edge are therefore not
    /// preserved.
    pub fn fill_rect(
        &mut self,
        corner_a: PixelCoord,
        corner_b: PixelCoord,
        on: bool,
    ) -> Result<(), OutOfRange> {
        if !corner_a.on_screen() || !corner_b.on_screen() {
            return Err(OutOfRange);
        }
        let (left, right) = (corner_a.0.min(corner_b.0), corner_a.0.max(corner_b.0));
        let (top, bottom) = (corner_a.1.min(corner_b.1), corner_a.1.max(corner_b.1));

        for (page, col) in iproduct!(top / 8..=bottom / 8, left..=right) {
            let mask = page_mask(page, top, bottom);
            self.page_mut(page as usize)[col as usize] = if on { mask } else { !mask };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::consts::*;
    use crate::buffer::PixelCoord as Px;

    fn lit(fb: &FrameBuffer) -> std::vec::Vec<(i16, i16)> {
        iproduct!(0..NUM_PIXEL_ROWS as i16, 0..NUM_PIXEL_COLS as i16)
            .filter(|&(y, x)| fb.pixel(Px(x, y)).unwrap())
            .map(|(y, x)| (x, y))
            .collect()
    }

    #[test]
    fn masks() {
        assert_eq!(page_mask(0, 0, 7), 0xFF);
        assert_eq!(page_mask(0, 2, 4), 0b0001_1100);
        assert_eq!(page_mask(0, 3, 20), 0b1111_1000);
        assert_eq!(page_mask(1, 3, 20), 0xFF);
        assert_eq!(page_mask(2, 3, 20), 0b0001_1111);
        assert_eq!(page_mask(5, 47, 47), 0b1000_0000);
    }

    #[test]
    fn set_and_clear_pixel() {
        let mut fb = FrameBuffer::new();
        fb.set_byte(2, 9, 0b0101_0000).unwrap();
        fb.set_pixel(Px(9, 17), true).unwrap();
        assert_eq!(fb.get_byte(2, 9), Ok(0b0101_0010));
        fb.set_pixel(Px(9, 22), false).unwrap();
        assert_eq!(fb.get_byte(2, 9), Ok(0b0001_0010));
        fb.set_pixel(Px(9, 17), false).unwrap();
        assert_eq!(fb.get_byte(2, 9), Ok(0b0001_0000));
    }

    #[test]
    fn pixel_out_of_range() {
        let mut fb = FrameBuffer::new();
        for &c in &[Px(-1, 0), Px(0, -1), Px(128, 0), Px(0, 64), Px(i16::MAX, i16::MIN)] {
            assert_eq!(fb.set_pixel(c, true), Err(OutOfRange));
        }
        assert_eq!(fb, FrameBuffer::new());
    }

    #[test]
    fn line_single_point() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(Px(40, 30), Px(40, 30), true).unwrap();
        assert_eq!(lit(&fb), &[(40, 30)]);
    }

    #[test]
    fn line_horizontal() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(Px(0, 0), Px(7, 0), true).unwrap();
        assert_eq!(lit(&fb), (0..8).map(|x| (x, 0)).collect::<std::vec::Vec<_>>());
        assert_eq!(fb.get_byte(0, 0), Ok(0x01));
        assert_eq!(fb.get_byte(0, 8), Ok(0x00));
    }

    #[test]
    fn line_vertical_reversed() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(Px(5, 20), Px(5, 10), true).unwrap();
        assert_eq!(lit(&fb), (10..=20).map(|y| (5, y)).collect::<std::vec::Vec<_>>());
    }

    #[test]
    fn line_diagonal() {
        let mut fb = FrameBuffer::new();
        fb.draw_line(Px(3, 3), Px(0, 0), true).unwrap();
        assert_eq!(lit(&fb), &[(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn line_shallow_truncates() {
        let mut fb = FrameBuffer::new();
        // Slope 0.5: rows 0, 0.5, 1, 1.5, 2 truncate to 0, 0, 1, 1, 2.
        fb.draw_line(Px(4, 2), Px(0, 0), true).unwrap();
        assert_eq!(lit(&fb), &[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn line_steep_truncates() {
        let mut fb = FrameBuffer::new();
        // Inverse slope -0.5 from the top endpoint: columns 2, 1.5, 1, 0.5, 0.
        fb.draw_line(Px(0, 4), Px(2, 0), true).unwrap();
        assert_eq!(lit(&fb), &[(2, 0), (1, 1), (1, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn line_steep_accumulates_in_double_precision() {
        let mut fb = FrameBuffer::new();
        // Six steps of 1/6 sum to just under 1.0, so the last row stays in column 0.
        fb.draw_line(Px(0, 0), Px(1, 6), true).unwrap();
        assert_eq!(lit(&fb), (0..=6).map(|y| (0, y)).collect::<std::vec::Vec<_>>());
    }

    #[test]
    fn line_off_clears() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(Px(0, 0), Px(127, 63), true).unwrap();
        fb.draw_line(Px(0, 0), Px(127, 0), false).unwrap();
        assert_eq!(fb.get_byte(0, 64), Ok(0xFE));
        assert_eq!(fb.get_byte(1, 64), Ok(0xFF));
    }

    #[test]
    fn line_out_of_range() {
        let mut fb = FrameBuffer::new();
        assert_eq!(fb.draw_line(Px(0, 0), Px(128, 10), true), Err(OutOfRange));
        assert_eq!(fb.draw_line(Px(-3, 0), Px(10, 10), true), Err(OutOfRange));
        assert_eq!(fb, FrameBuffer::new());
    }

    #[test]
    fn rect_top_left_block() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(Px(0, 0), Px(7, 7), true).unwrap();
        for col in 0..NUM_PIXEL_COLS {
            let expected = if col < 8 { 0xFF } else { 0x00 };
            assert_eq!(fb.get_byte(0, col), Ok(expected));
        }
        assert!(fb.pages()[1..].iter().all(|p| p.iter().all(|&b| b == 0)));
    }

    #[test]
    fn rect_clear_block() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(Px(0, 0), Px(127, 63), true).unwrap();
        fb.fill_rect(Px(0, 0), Px(7, 7), false).unwrap();
        let lit = lit(&fb);
        assert_eq!(lit.len(), 128 * 64 - 64);
        assert!(lit.iter().all(|&(x, y)| x >= 8 || y >= 8));
    }

    #[test]
    fn rect_spanning_pages() {
        let mut fb = FrameBuffer::new();
        fb.fill_rect(Px(10, 5), Px(12, 18), true).unwrap();
        for col in 10..=12 {
            assert_eq!(fb.get_byte(0, col), Ok(0b1110_0000));
            assert_eq!(fb.get_byte(1, col), Ok(0xFF));
            assert_eq!(fb.get_byte(2, col), Ok(0b0000_0111));
            assert_eq!(fb.get_byte(3, col), Ok(0));
        }
        assert_eq!(fb.get_byte(0, 9), Ok(0));
        assert_eq!(fb.get_byte(1, 13), Ok(0));
    }

    #[test]
    fn rect_overwrites_whole_byte() {
        let mut fb = FrameBuffer::new();
        fb.set_byte(0, 3, 0xFF).unwrap();
        fb.fill_rect(Px(3, 2), Px(3, 4), true).unwrap();
        assert_eq!(fb.get_byte(0, 3), Ok(0b0001_1100));
        fb.fill_rect(Px(3, 2), Px(3, 4), false).unwrap();
        assert_eq!(fb.get_byte(0, 3), Ok(0b1110_0011));
    }

    #[test]
    fn rect_corners_any_order() {
        let mut a = FrameBuffer::new();
        let mut b = FrameBuffer::new();
        a.fill_rect(Px(20, 9), Px(40, 30), true).unwrap();
        b.fill_rect(Px(40, 9), Px(20, 30), true).unwrap();
        assert_eq!(a, b);
        b.clear();
        b.fill_rect(Px(40, 30), Px(20, 9), true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rect_out_of_range() {
        let mut fb = FrameBuffer::new();
        assert_eq!(fb.fill_rect(Px(0, 0), Px(7, 64), true), Err(OutOfRange));
        assert_eq!(fb.fill_rect(Px(-1, 0), Px(7, 7), true), Err(OutOfRange));
        assert_eq!(fb, FrameBuffer::new());
    }
}
