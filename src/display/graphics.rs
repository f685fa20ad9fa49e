//! `embedded-graphics` support, so its primitives, images and fonts can be drawn into the
//! framebuffer. Pixels falling outside the panel are clipped.

use core::convert::{Infallible, TryFrom};

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::buffer::PixelCoord;
use crate::command::consts::*;
use crate::display::Display;
use crate::font::Font;
use crate::interface::DisplayInterface;

impl<DI, F> OriginDimensions for Display<DI, F>
where
    DI: DisplayInterface,
    F: Font,
{
    fn size(&self) -> Size {
        Size::new(NUM_PIXEL_COLS as u32, NUM_PIXEL_ROWS as u32)
    }
}

impl<DI, F> DrawTarget for Display<DI, F>
where
    DI: DisplayInterface,
    F: Font,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let coord = match (i16::try_from(point.x), i16::try_from(point.y)) {
                (Ok(x), Ok(y)) => PixelCoord(x, y),
                _ => continue,
            };
            // Off-screen pixels are clipped.
            self.buffer.set_pixel(coord, color.is_on()).ok();
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer.fill(color.is_on());
        Ok(())
    }
}
