//! Glue for the NS4490 DAC board: an AK4490 on I²C, its PDN line on a GPIO,
//! and an I²S controller on the host that receives the bit clock ratio.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::codec::Codec;
use crate::error::{Error, ResetError};
use crate::format::NS4490_DAI_FORMAT;
use crate::mode;
use crate::regmap::RegisterBus;
use crate::reset::ResetController;

//
// Public Types
//

/// An attached NS4490 board.
///
/// Owns the PDN line and the codec. There is only ever one of these per
/// board, and it is handed the line at attach time rather than finding it
/// anywhere global.
pub struct Ns4490Dac<B, P> {
    codec: Codec<B>,
    reset: ResetController<P>,
}

//
// impls on Public Types
//

impl<B, P> Ns4490Dac<B, P>
where
    B: RegisterBus,
    P: OutputPin,
{
    /// Reset the AK4490 through its PDN line and start driving it.
    ///
    /// If PDN can't be driven we can't know what state the chip is in, so
    /// the board is not attached.
    pub fn attach<D>(bus: B, pdn: P, delay: &mut D) -> Result<Ns4490Dac<B, P>, ResetError<P::Error>>
    where
        D: DelayMs<u8>,
    {
        let mut reset = ResetController::new(pdn);
        if let Err(e) = reset.pulse(delay) {
            #[cfg(feature = "defmt")]
            defmt::error!("NS4490 attach failed: cannot reset the AK4490");
            return Err(e);
        }
        Ok(Ns4490Dac {
            codec: Codec::new(bus),
            reset,
        })
    }

    /// Called when a stream is opened: hand the codec the board's fixed DAI
    /// format.
    pub fn open(&mut self) -> Result<(), Error<B::Error>> {
        self.codec.set_format(NS4490_DAI_FORMAT)
    }

    /// Configure the board for a stream and get the bit clock ratio the I²S
    /// controller must use.
    pub fn hw_params(&mut self, rate: u32, width: u8) -> Result<u32, Error<B::Error>> {
        let bclk_ratio = match mode::resolve(rate, width) {
            Some(mode) => mode.bclk_ratio,
            None => return Err(Error::NotSupported { rate, width }),
        };
        self.codec.apply_parameters(rate, width)?;
        Ok(bclk_ratio)
    }

    /// The codec.
    pub fn codec(&self) -> &Codec<B> {
        &self.codec
    }

    /// The codec, for driving bias, mute and the DAC controls.
    pub fn codec_mut(&mut self) -> &mut Codec<B> {
        &mut self.codec
    }

    /// Detach, giving back the register bus and the PDN line.
    pub fn release(self) -> (B, P) {
        (self.codec.release(), self.reset.release())
    }
}

//
// End of file
//
