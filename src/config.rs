//! Defines the per-device hardware addressing values, so that several displays on several buses can
//! be driven side by side with different wiring.

use crate::command::consts::*;

/// Slave address of an SH1106 with SA0 tied low (0x78 as an 8-bit write address).
pub const DEFAULT_ADDRESS: u8 = 0x3C;
/// RAM column shown on the first visible pixel column of common 128x64 panels.
pub const DEFAULT_COLUMN_OFFSET: u8 = 2;

/// A configuration for the display. Builder methods offer a declarative way to override the values
/// fitting the common 128x64 modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) address: u8,
    pub(crate) column_offset: u8,
    pub(crate) power_on_at_init: bool,
}

impl Config {
    /// Create a configuration for a module at `DEFAULT_ADDRESS` with `DEFAULT_COLUMN_OFFSET`,
    /// which is switched on by `Display::init`.
    pub fn new() -> Self {
        Config {
            address: DEFAULT_ADDRESS,
            column_offset: DEFAULT_COLUMN_OFFSET,
            power_on_at_init: true,
        }
    }

    /// Extend this `Config` with the 7-bit bus address of the controller. This is read when
    /// building an `I2cInterface` with `Config::i2c_interface`.
    pub fn address(self, address: u8) -> Self {
        Self { address, ..self }
    }

    /// Extend this `Config` with the RAM column which corresponds to pixel column 0 of the panel.
    /// The controller has 132 RAM columns, so the offset can be at most 4 for a 128 pixel wide
    /// panel; `Display::new` rejects larger values.
    pub fn column_offset(self, column_offset: u8) -> Self {
        Self {
            column_offset,
            ..self
        }
    }

    /// Extend this `Config` to choose whether `Display::init` turns the panel on.
    pub fn power_on_at_init(self, power_on_at_init: bool) -> Self {
        Self {
            power_on_at_init,
            ..self
        }
    }

    /// The 7-bit bus address of the controller.
    pub fn bus_address(&self) -> u8 {
        self.address
    }

    /// Build an I2C interface for the controller on `i2c` at the configured address.
    pub fn i2c_interface<I2C>(&self, i2c: I2C) -> crate::interface::i2c::I2cInterface<I2C>
    where
        I2C: embedded_hal::i2c::I2c,
    {
        crate::interface::i2c::I2cInterface::new(i2c, self.address)
    }

    /// Whether the visible columns, shifted by the column offset, fit in controller RAM.
    pub(crate) fn is_valid(&self) -> bool {
        self.column_offset as u16 + NUM_PIXEL_COLS as u16 <= NUM_RAM_COLS as u16
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
