//! Driver library for the Sino Wealth SH1106 monochrome dot matrix OLED display controller,
//! connected over I2C.
//!
//! Drawing goes into a framebuffer held by the `Display`, in the same page layout as the
//! controller's RAM; `Display::update_display` then writes the whole framebuffer out.
//!
//! ```
//! use sh1106::{Config, Display, Error, PixelCoord};
//!
//! fn greet<I2C>(i2c: I2C, font: &[[u8; 8]; 128]) -> Result<(), Error<I2C::Error>>
//! where
//!     I2C: embedded_hal::i2c::I2c,
//! {
//!     let config = Config::new();
//!     let mut disp = Display::new(config.i2c_interface(i2c), config, font)?;
//!     disp.init()?;
//!     disp.draw_rect(PixelCoord(0, 0), PixelCoord(127, 7), true)?;
//!     disp.set_cursor(2, 0)?;
//!     disp.write_string("hello", 5);
//!     disp.update_display()
//! }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]


pub mod buffer;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;
pub mod raster;
pub mod text;

// Re-exports for primary API.
pub use buffer::{FrameBuffer, PixelCoord};
pub use command::consts;
pub use config::Config;
pub use display::Display;
pub use error::{Error, OutOfRange};
pub use font::{Font, Glyph};
pub use interface::i2c::I2cInterface;
pub use text::Cursor;
