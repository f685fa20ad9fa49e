/// A channel to the display controller which can carry commands and display RAM data.
///
/// Each call performs exactly one transaction on the underlying transport, and failures are passed
/// through as the transport's own error value.
pub trait DisplayInterface {
    type Error;

    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

pub mod i2c {
    //! The I2C interface addresses the controller as a bus slave, and prefixes each transaction
    //! with a control byte telling the controller whether the rest of the transaction is a command
    //! or display RAM data.

    use embedded_hal::i2c::{I2c, Operation};

    use super::DisplayInterface;

    /// Control byte: the last control byte in the transaction (Co = 0), and the following byte is
    /// a command (D/C = 0).
    pub const CONTROL_COMMAND: u8 = 0x00;
    /// Control byte: the last control byte in the transaction (Co = 0), and the following bytes
    /// are written to display RAM (D/C = 1).
    pub const CONTROL_DATA: u8 = 0x40;

    pub struct I2cInterface<I2C> {
        /// The I2C master device connected to the SH1106.
        i2c: I2C,
        /// The 7-bit slave address of the SH1106.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: I2c,
    {
        /// Create a new I2C interface to communicate with the display driver. `i2c` is the I2C
        /// master device, and `address` is the 7-bit slave address of the SH1106, usually 0x3C
        /// (0x78 as an 8-bit write address) or 0x3D depending on the SA0 pin.
        ///
        /// Bus timeouts are the responsibility of the I2C master implementation.
        pub fn new(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        /// Consume the interface and give back the I2C master device.
        pub fn release(self) -> I2C {
            self.i2c
        }

        fn write_with_control(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
            // Adjacent writes go out back to back under one START/STOP, so the payload is
            // never copied to prepend the control byte.
            self.i2c.transaction(
                self.address,
                &mut [Operation::Write(&[control]), Operation::Write(payload)],
            )
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: I2c,
    {
        type Error = I2C::Error;

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.write_with_control(CONTROL_COMMAND, &[cmd])
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.write_with_control(CONTROL_DATA, buf)
        }
    }
}
