//! Cached register access.
//!
//! None of the AK4490's registers change on their own, so the last value
//! written is always the value in the chip. [`RegisterMap`] keeps that value
//! and answers reads, and the read half of a read-modify-write, from the
//! cache. The bus is only read for a readable register that has never been
//! written or seeded.

use core::marker::PhantomData;

use crate::error::Error;

//
// Public Types
//

/// Something that can move single byte register values to and from a device.
pub trait RegisterBus {
    /// The transport's error type.
    type Error;

    /// Write `value` to the register at `address`.
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Read the register at `address`.
    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error>;
}

/// Describes the registers of a device: where they are, what you may do to
/// them, and what they hold after power-on.
pub trait RegisterSpace: Copy + core::fmt::Debug + 'static {
    /// Address on the control port.
    fn address(self) -> u8;

    /// Whether the device lets us read this register back.
    fn is_readable(self) -> bool;

    /// Whether the device lets us write this register.
    fn is_writeable(self) -> bool;

    /// Value after power-on, if known.
    fn default_value(self) -> Option<u8>;

    /// Every register in the space.
    fn all() -> &'static [Self];
}

/// A write-through register cache in front of a [`RegisterBus`].
pub struct RegisterMap<B, R> {
    bus: B,
    cache: [Option<u8>; CACHE_SIZE],
    _space: PhantomData<R>,
}

//
// Private Data
//

/// One slot for every 8-bit register address.
const CACHE_SIZE: usize = 256;

//
// impls on Public Types
//

impl<T> RegisterBus for &mut T
where
    T: RegisterBus + ?Sized,
{
    type Error = T::Error;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_register(address, value)
    }

    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error> {
        (**self).read_register(address)
    }
}

impl<B, R> RegisterMap<B, R>
where
    B: RegisterBus,
    R: RegisterSpace,
{
    /// Create a register map where only write-only registers are seeded with
    /// their defaults. Everything else is fetched from the device on first
    /// use.
    pub fn new(bus: B) -> RegisterMap<B, R> {
        let mut map = RegisterMap {
            bus,
            cache: [None; CACHE_SIZE],
            _space: PhantomData,
        };
        for reg in R::all().iter().filter(|r| !r.is_readable()) {
            map.cache[reg.address() as usize] = reg.default_value();
        }
        map
    }

    /// Create a register map that assumes the device has just come out of
    /// reset and holds its power-on defaults.
    pub fn with_defaults(bus: B) -> RegisterMap<B, R> {
        let mut map = RegisterMap {
            bus,
            cache: [None; CACHE_SIZE],
            _space: PhantomData,
        };
        map.reset_cache();
        map
    }

    /// Forget everything written and go back to the power-on defaults.
    ///
    /// Call this when the device has been power-cycled behind our back.
    pub fn reset_cache(&mut self) {
        self.cache = [None; CACHE_SIZE];
        for reg in R::all() {
            self.cache[reg.address() as usize] = reg.default_value();
        }
    }

    /// Write a whole register.
    ///
    /// The cache is only updated once the device has accepted the value.
    pub fn write(&mut self, register: R, value: u8) -> Result<(), Error<B::Error>> {
        let address = register.address();
        if !register.is_writeable() {
            #[cfg(feature = "defmt")]
            defmt::error!("AK4490 register 0x{:02x} is not writeable", address);
            return Err(Error::NotWriteable(address));
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("Setting AK4490 0x{:02x} to 0x{:02x}", address, value);
        self.bus
            .write_register(address, value)
            .map_err(|source| Error::Io {
                register: address,
                value: Some(value),
                source,
            })?;
        self.cache[address as usize] = Some(value);
        Ok(())
    }

    /// Change only the bits in `mask` to the matching bits of `value`.
    ///
    /// The current value comes from the cache, so this costs exactly one
    /// write once the register is cached.
    pub fn update_bits(&mut self, register: R, mask: u8, value: u8) -> Result<(), Error<B::Error>> {
        if !register.is_writeable() {
            return Err(Error::NotWriteable(register.address()));
        }
        let current = self.fetch(register)?;
        self.write(register, (current & !mask) | (value & mask))
    }

    /// Read a register.
    pub fn read(&mut self, register: R) -> Result<u8, Error<B::Error>> {
        if !register.is_readable() {
            return Err(Error::NotReadable(register.address()));
        }
        self.fetch(register)
    }

    /// Look at the cached value without touching the bus or checking
    /// permissions.
    pub fn cached(&self, register: R) -> Option<u8> {
        self.cache[register.address() as usize]
    }

    /// Push every cached value that differs from the power-on default out to
    /// the device.
    ///
    /// Used to restore the configuration after the device lost power.
    pub fn sync(&mut self) -> Result<(), Error<B::Error>> {
        for &reg in R::all().iter().filter(|r| r.is_writeable()) {
            match self.cached(reg) {
                Some(value) if Some(value) != reg.default_value() => {
                    self.write(reg, value)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Give back the bus.
    pub fn release(self) -> B {
        self.bus
    }

    fn fetch(&mut self, register: R) -> Result<u8, Error<B::Error>> {
        let address = register.address();
        if let Some(value) = self.cache[address as usize] {
            return Ok(value);
        }
        if !register.is_readable() {
            return Err(Error::NotReadable(address));
        }
        let value = self
            .bus
            .read_register(address)
            .map_err(|source| Error::Io {
                register: address,
                value: None,
                source,
            })?;
        self.cache[address as usize] = Some(value);
        Ok(value)
    }
}

//
// Tests
//


//
// End of file
//
