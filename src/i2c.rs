//! Register transport over I²C.

use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::regmap::RegisterBus;

//
// Public Types
//

/// The AK4490 has one of four I²C addresses, depending on how the CAD1 and
/// CAD0 pins are strapped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusAddress {
    /// CAD1 low, CAD0 low
    Cad00 = 0x10,
    /// CAD1 low, CAD0 high
    Cad01 = 0x11,
    /// CAD1 high, CAD0 low
    Cad10 = 0x12,
    /// CAD1 high, CAD0 high
    Cad11 = 0x13,
}

/// Talks to the AK4490's control port over an I²C bus.
///
/// A register write is `[address, value]`. A read writes `[address]` and
/// reads one byte back in the same transaction.
pub struct I2cBus<I> {
    i2c: I,
    bus_address: u8,
}

//
// impls on Public Types
//

impl From<BusAddress> for u8 {
    fn from(addr: BusAddress) -> u8 {
        addr as u8
    }
}

impl<I> I2cBus<I> {
    /// Wrap an I²C bus.
    pub fn new(i2c: I, bus_address: BusAddress) -> I2cBus<I> {
        I2cBus {
            i2c,
            bus_address: bus_address.into(),
        }
    }

    /// Give back the I²C bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I, E> RegisterBus for I2cBus<I>
where
    I: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = E;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), E> {
        self.i2c.write(self.bus_address, &[address, value])
    }

    fn read_register(&mut self, address: u8) -> Result<u8, E> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(self.bus_address, &[address], &mut buffer)?;
        Ok(buffer[0])
    }
}

//
// Tests
//


//
// End of file
//
