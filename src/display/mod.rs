//! The main API to the display driver. It owns the framebuffer and text cursor, offers the drawing
//! operations, and flushes the framebuffer to the controller.

#[cfg(feature = "graphics")]
pub mod graphics;

use core::fmt;

use crate::buffer::{FrameBuffer, PixelCoord};
use crate::command::Command;
use crate::config::Config;
use crate::error::{Error, OutOfRange};
use crate::font::Font;
use crate::interface;
use crate::text::Cursor;

/// A driver for an SH1106 display.
pub struct Display<DI, F>
where
    DI: interface::DisplayInterface,
    F: Font,
{
    iface: DI,
    config: Config,
    buffer: FrameBuffer,
    cursor: Cursor,
    font: F,
}

impl<DI, F> Display<DI, F>
where
    DI: interface::DisplayInterface,
    F: Font,
{
    /// Construct a new display driver for a panel connected to the interface `iface`, wired as
    /// described by `config`, drawing text with `font`. Nothing is sent to the display until
    /// `init`.
    ///
    /// Fails if the configured column offset would put visible columns outside controller RAM.
    pub fn new(iface: DI, config: Config, font: F) -> Result<Self, OutOfRange> {
        if !config.is_valid() {
            return Err(OutOfRange);
        }
        Ok(Display {
            iface,
            config,
            buffer: FrameBuffer::new(),
            cursor: Cursor::new(),
            font,
        })
    }

    /// Initialize the display: turn it on if the config asks for it, and start over with an empty
    /// framebuffer and the cursor in the top left cell.
    pub fn init(&mut self) -> Result<(), Error<DI::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sh1106: init, address {=u8:#x}", self.config.address);
        if self.config.power_on_at_init {
            self.power_on()?;
        }
        self.cursor = Cursor::new();
        self.buffer.clear();
        Ok(())
    }

    /// Turn the panel on. Display RAM contents are shown as they were left.
    pub fn power_on(&mut self) -> Result<(), Error<DI::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sh1106: power on");
        Command::SetDisplayPower(true).send(&mut self.iface)
    }

    /// Turn the panel off. Display RAM is retained.
    pub fn power_off(&mut self) -> Result<(), Error<DI::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sh1106: power off");
        Command::SetDisplayPower(false).send(&mut self.iface)
    }

    /// Set the vertical scroll offset: display RAM row `line` is shown on the first row of the
    /// panel, and the rows above it wrap to the bottom.
    pub fn set_display_start_line(&mut self, line: u8) -> Result<(), Error<DI::Error>> {
        Command::SetStartLine(line).send(&mut self.iface)
    }

    /// Write the whole framebuffer to display RAM, page by page.
    ///
    /// Each page is written in read-modify-write mode, which returns the column pointer to the
    /// column offset when the mode ends, so the column address only has to be set once. A
    /// transport failure stops the update at once: pages already written stay written, and the
    /// rest of the panel keeps showing what it showed before.
    pub fn update_display(&mut self) -> Result<(), Error<DI::Error>> {
        Command::SetColumnAddress(self.config.column_offset).send(&mut self.iface)?;
        for (page, data) in self.buffer.pages().iter().enumerate() {
            let page = page as u8;
            Command::SetPageAddress(page).send(&mut self.iface)?;
            Command::ReadModifyWrite.send(&mut self.iface)?;
            if let Err(e) = self.iface.send_data(&data[..]) {
                #[cfg(feature = "defmt")]
                defmt::warn!("sh1106: update aborted at page {=u8}", page);
                return Err(Error::Transport(e));
            }
            Command::EndReadModifyWrite.send(&mut self.iface)?;
            #[cfg(feature = "defmt")]
            defmt::trace!("sh1106: page {=u8} flushed", page);
        }
        Ok(())
    }

    /// Turn every pixel of the framebuffer off.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// See `FrameBuffer::set_pixel`.
    pub fn draw_pixel(&mut self, coord: PixelCoord, on: bool) -> Result<(), OutOfRange> {
        self.buffer.set_pixel(coord, on)
    }

    /// See `FrameBuffer::draw_line`.
    pub fn draw_line(
        &mut self,
        from: PixelCoord,
        to: PixelCoord,
        on: bool,
    ) -> Result<(), OutOfRange> {
        self.buffer.draw_line(from, to, on)
    }

    /// See `FrameBuffer::fill_rect`.
    pub fn draw_rect(
        &mut self,
        upper_left: PixelCoord,
        lower_right: PixelCoord,
        on: bool,
    ) -> Result<(), OutOfRange> {
        self.buffer.fill_rect(upper_left, lower_right, on)
    }

    /// Move the text cursor to character cell (`row`, `col`).
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), OutOfRange> {
        self.cursor.set(row, col)
    }

    /// See `Cursor::write_char`.
    pub fn write_char(&mut self, c: char) {
        self.cursor.write_char(&mut self.buffer, &self.font, c)
    }

    /// See `Cursor::write_string`.
    pub fn write_string(&mut self, s: &str, n: usize) {
        self.cursor.write_string(&mut self.buffer, &self.font, s, n)
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and give back the interface.
    pub fn release(self) -> DI {
        self.iface
    }
}

impl<DI, F> fmt::Write for Display<DI, F>
where
    DI: interface::DisplayInterface,
    F: Font,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.write_char(c);
        }
        Ok(())
    }
}
