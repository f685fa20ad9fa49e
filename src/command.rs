//! The command set for the SH1106.
//!
//! Note 1: The display RAM of the SH1106 is arranged in 8 pages of 132 columns, where each column
//! of a page is one byte driving 8 vertically stacked pixels, bit 0 topmost. Common 128x64 panels
//! only connect the middle 128 columns, so the visible area starts at a small column offset (see
//! `Config::column_offset`).
//!
//! Every command is a single byte, and every byte is sent in its own bus transaction. Commands with
//! an argument which does not fit in the low bits of one byte (column address) are split into
//! several command bytes.

use crate::error::{Error, OutOfRange};
use crate::interface::DisplayInterface;

pub mod consts {
    //! Geometry of the controller and of the 128x64 panels it usually drives.

    /// Visible pixel columns.
    pub const NUM_PIXEL_COLS: u8 = 128;
    /// Visible pixel rows.
    pub const NUM_PIXEL_ROWS: u8 = 64;
    /// Pages of display RAM, each 8 pixel rows tall.
    pub const NUM_PAGES: u8 = NUM_PIXEL_ROWS / 8;
    /// Columns of display RAM, including the ones not wired to the panel. (Note 1)
    pub const NUM_RAM_COLS: u8 = 132;

    pub const PIXEL_COL_MAX: u8 = NUM_PIXEL_COLS - 1;
    pub const PIXEL_ROW_MAX: u8 = NUM_PIXEL_ROWS - 1;
    pub const PAGE_MAX: u8 = NUM_PAGES - 1;
    pub const RAM_COL_MAX: u8 = NUM_RAM_COLS - 1;
    /// The start line register is 6 bits wide.
    pub const START_LINE_MAX: u8 = 63;
}

use self::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Turn the panel on (`true`) or off (`false`). Display RAM is retained while off.
    SetDisplayPower(bool),
    /// Select the page which subsequent data writes go to. Range is 0-7.
    SetPageAddress(u8),
    /// Set the column address pointer for subsequent data writes. The pointer advances by one for
    /// each data byte written. Range is 0-131. (Note 1)
    SetColumnAddress(u8),
    /// Enter read-modify-write mode. While active, the column address increments only on writes,
    /// and `EndReadModifyWrite` restores the column address in effect when the mode began.
    ReadModifyWrite,
    /// Leave read-modify-write mode.
    EndReadModifyWrite,
    /// Set the display RAM row which is shown on the first row of the panel, rolling the image
    /// upwards. Range is 0-63.
    SetStartLine(u8),
}

macro_rules! ok_command {
    ($buf:ident,[$arg0:expr]) => {{
        $buf[0] = $arg0;
        Ok(&$buf[..1])
    }};
    ($buf:ident,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $arg0;
        $buf[1] = $arg1;
        Ok(&$buf[..2])
    }};
}

impl Command {
    /// Encode the command into the command bytes to be transmitted, in order, using `buf` as
    /// storage.
    pub fn encode(self, buf: &mut [u8; 2]) -> Result<&[u8], OutOfRange> {
        match self {
            Command::SetDisplayPower(on) => ok_command!(
                buf,
                [match on {
                    true => 0xAF,
                    false => 0xAE,
                }]
            ),
            Command::SetPageAddress(page) => match page {
                0..=PAGE_MAX => ok_command!(buf, [0xB0 | page]),
                _ => Err(OutOfRange),
            },
            Command::SetColumnAddress(col) => match col {
                0..=RAM_COL_MAX => ok_command!(buf, [0x10 | (col >> 4), col & 0x0F]),
                _ => Err(OutOfRange),
            },
            Command::ReadModifyWrite => ok_command!(buf, [0xE0]),
            Command::EndReadModifyWrite => ok_command!(buf, [0xEE]),
            Command::SetStartLine(line) => match line {
                0..=START_LINE_MAX => ok_command!(buf, [0x40 | line]),
                _ => Err(OutOfRange),
            },
        }
    }

    /// Transmit the command over `iface`. Nothing is transmitted if an argument is out of range.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 2];
        for &cmd in self.encode(&mut arg_buf)? {
            iface.send_command(cmd).map_err(Error::Transport)?;
        }
        Ok(())
    }
}
