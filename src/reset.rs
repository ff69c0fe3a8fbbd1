//! Hardware reset through the AK4490's PDN (power-down) pin.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::error::ResetError;

//
// Public Types
//

/// Owns the GPIO wired to the AK4490's PDN pin.
///
/// PDN is active low: holding it low keeps the chip powered down and clears
/// every register to its default.
pub struct ResetController<P> {
    pdn: P,
}

//
// Public Data
//

/// How long PDN is held low. The datasheet asks for at least 150 ns.
pub const SETTLE_MS: u8 = 1;

//
// impls on Public Types
//

impl<P> ResetController<P>
where
    P: OutputPin,
{
    /// Take ownership of the PDN line.
    pub fn new(pdn: P) -> ResetController<P> {
        ResetController { pdn }
    }

    /// Power-cycle the chip: drive PDN low, wait [`SETTLE_MS`], then drive
    /// it high and leave it there.
    ///
    /// If the line can't be driven the chip is in an unknown state, so the
    /// error must stop whatever is bringing the chip up.
    pub fn pulse<D>(&mut self, delay: &mut D) -> Result<(), ResetError<P::Error>>
    where
        D: DelayMs<u8>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("Pulsing AK4490 PDN");
        self.pdn.set_low().map_err(ResetError::Pin)?;
        delay.delay_ms(SETTLE_MS);
        self.pdn.set_high().map_err(ResetError::Pin)?;
        Ok(())
    }

    /// Give back the PDN line.
    pub fn release(self) -> P {
        self.pdn
    }
}

//
// Tests
//


//
// End of file
//
