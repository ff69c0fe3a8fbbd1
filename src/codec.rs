//! The AK4490 codec: stream reconfiguration, mute, bias and the DAC's
//! filter and attenuation controls.

use crate::bias::{self, BiasLevel};
use crate::error::Error;
use crate::format::{self, DaiFormat};
use crate::mode;
use crate::registers::*;
use crate::regmap::{RegisterBus, RegisterMap};

//
// Public Types
//

/// The operations an audio framework drives a codec through over a stream's
/// life.
pub trait CodecDai {
    /// Error returned by every operation.
    type Error;

    /// Check and store the digital audio interface format.
    fn set_format(&mut self, format: DaiFormat) -> Result<(), Self::Error>;

    /// Reconfigure the codec for a sample rate (Hz) and width (bits).
    fn apply_parameters(&mut self, rate: u32, width: u8) -> Result<(), Self::Error>;

    /// Mute or unmute the output.
    fn set_mute(&mut self, muted: bool) -> Result<(), Self::Error>;

    /// Move to a new bias level.
    fn set_bias_level(&mut self, level: BiasLevel) -> Result<(), Self::Error>;
}

/// What the driver knows about the codec, beyond its registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Current bias level
    pub bias_level: BiasLevel,
    /// Last accepted DAI format
    pub format: Option<DaiFormat>,
    /// Sample rate of the active mode, in Hz
    pub rate: Option<u32>,
    /// Sample width of the active mode, in bits
    pub width: Option<u8>,
    /// Whether soft mute is on
    pub muted: bool,
}

/// Selects the left channel, the right channel, or both.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Just the left channel
    Left,
    /// Just the right channel
    Right,
    /// Both channels
    Both,
}

/// De-emphasis filter response.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeEmphasis {
    /// 44.1 kHz de-emphasis
    Khz44_1 = 0b00,
    /// No de-emphasis (default)
    Off = 0b01,
    /// 48 kHz de-emphasis
    Khz48 = 0b10,
    /// 32 kHz de-emphasis
    Khz32 = 0b11,
}

/// Digital filter roll-off characteristic.
///
/// Selected by the SD, SLOW and SSLOW bits together.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RollOff {
    /// Sharp roll-off, traditional delay
    Sharp,
    /// Slow roll-off, traditional delay
    Slow,
    /// Sharp roll-off, short delay (default)
    ShortDelaySharp,
    /// Slow roll-off, short delay
    ShortDelaySlow,
    /// Super slow roll-off
    SuperSlow,
}

/// Sound quality preset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundSetting {
    /// Setting 1 (default)
    One = 0b00,
    /// Setting 2
    Two = 0b01,
    /// Setting 3
    Three = 0b10,
}

/// Represents the state inside our AK4490 chip.
pub struct Codec<B> {
    regs: RegisterMap<B, Register>,
    state: DeviceState,
    /// Stream mode to put back on resume
    suspended_mode: Option<(u32, u8)>,
}

//
// impls on Public Types
//

impl<B> Codec<B>
where
    B: RegisterBus,
{
    /// Create a new AK4490 driver.
    ///
    /// The chip must have just come out of a hardware reset (see
    /// [`crate::reset::ResetController::pulse`]), so that its registers hold
    /// their power-on defaults. The codec starts at [`BiasLevel::Off`].
    pub fn new(bus: B) -> Codec<B> {
        let regs: RegisterMap<B, Register> = RegisterMap::with_defaults(bus);
        let muted = regs
            .cached(Register::Control2)
            .map_or(false, |v| v & SMUTE != 0);
        Codec {
            regs,
            state: DeviceState {
                bias_level: BiasLevel::Off,
                format: None,
                rate: None,
                width: None,
                muted,
            },
            suspended_mode: None,
        }
    }

    /// What the driver currently believes about the codec.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// The register cache.
    pub fn registers(&self) -> &RegisterMap<B, Register> {
        &self.regs
    }

    /// Give back the bus.
    pub fn release(self) -> B {
        self.regs.release()
    }

    /// Check a DAI format and remember it.
    ///
    /// Writes no registers; the interface format itself comes from the mode
    /// table when [`Codec::apply_parameters`] runs.
    pub fn set_format(&mut self, format: DaiFormat) -> Result<(), Error<B::Error>> {
        if let Err(e) = format::validate(&format) {
            #[cfg(feature = "defmt")]
            defmt::error!("AK4490 rejected DAI format {}: {}", format, e);
            return Err(e.into());
        }
        self.state.format = Some(format);
        Ok(())
    }

    /// Reconfigure the chip for a new sample rate and width.
    ///
    /// Every register that shapes the format or clocks is written while
    /// the chip is held in reset, and reset is released last. An unsupported
    /// combination is refused before any register is touched. If a register
    /// operation fails part way, the remaining steps are skipped and the chip
    /// is left in whatever state it reached; call this again, or power-cycle,
    /// to recover.
    pub fn apply_parameters(&mut self, rate: u32, width: u8) -> Result<(), Error<B::Error>> {
        let Some(mode) = mode::resolve(rate, width) else {
            #[cfg(feature = "defmt")]
            defmt::error!("AK4490 invalid parameters: rate {}, width {}", rate, width);
            return Err(Error::NotSupported { rate, width });
        };

        self.state.rate = None;
        self.state.width = None;

        self.regs
            .write(Register::Control1, ACKS_MANUAL | mode.dif | RSTN_RESET)?;
        self.regs.update_bits(Register::Control2, DFSL, mode.dfsl)?;
        self.regs.update_bits(Register::Control4, DFSH, mode.dfsh)?;
        self.regs
            .write(Register::ExtClkGen, CLK_ENABLE | mode.clkgen)?;
        self.regs.update_bits(Register::Control1, RSTN, RSTN_NORMAL)?;

        self.state.rate = Some(rate);
        self.state.width = Some(width);

        // The clock generator can't be read back, so this is the cached copy
        #[cfg(feature = "defmt")]
        defmt::info!(
            "AK4490 rate {} width {} clkgen 0x{:02x}",
            rate,
            width,
            self.regs.cached(Register::ExtClkGen).unwrap_or(0)
        );
        Ok(())
    }

    /// Turn soft mute on or off. Safe at any bias level.
    pub fn set_mute(&mut self, muted: bool) -> Result<(), Error<B::Error>> {
        self.regs
            .update_bits(Register::Control2, SMUTE, if muted { SMUTE } else { 0 })?;
        self.state.muted = muted;
        Ok(())
    }

    /// Move to a new bias level.
    ///
    /// Only neighbouring levels can be reached, except that any level may
    /// drop straight to [`BiasLevel::Off`]. If a register operation fails the
    /// level does not change.
    ///
    /// Powering up from, or down to, [`BiasLevel::Off`] puts the chip
    /// through reset, so the stream mode is forgotten and
    /// [`Codec::apply_parameters`] must run again before streaming.
    pub fn set_bias_level(&mut self, level: BiasLevel) -> Result<(), Error<B::Error>> {
        let from = self.state.bias_level;
        #[cfg(feature = "defmt")]
        defmt::debug!("AK4490 bias {} -> {}", from, level);
        if bias::resets_chip(from, level) {
            self.state.rate = None;
            self.state.width = None;
        }
        bias::transition(&mut self.regs, from, level)?;
        self.state.bias_level = level;
        Ok(())
    }

    /// Power down ahead of a system suspend.
    ///
    /// The stream mode in use, if any, is remembered for [`Codec::resume`].
    pub fn suspend(&mut self) -> Result<(), Error<B::Error>> {
        if let (Some(rate), Some(width)) = (self.state.rate, self.state.width) {
            self.suspended_mode = Some((rate, width));
        }
        self.set_bias_level(BiasLevel::Off)
    }

    /// Restore the chip after a system suspend.
    ///
    /// The chip may have lost power, so every register we changed from its
    /// default is written again before the codec is brought back to
    /// [`BiasLevel::Standby`]. Power-up reprograms the interface format and
    /// clock generator, so the stream mode remembered by [`Codec::suspend`]
    /// is then applied again in full.
    pub fn resume(&mut self) -> Result<(), Error<B::Error>> {
        self.regs.sync()?;
        self.set_bias_level(BiasLevel::Standby)?;
        if let Some((rate, width)) = self.suspended_mode.take() {
            self.apply_parameters(rate, width)?;
        }
        Ok(())
    }

    /// Select the de-emphasis filter.
    pub fn set_de_emphasis(&mut self, de_emphasis: DeEmphasis) -> Result<(), Error<B::Error>> {
        self.regs
            .update_bits(Register::Control2, DEM, (de_emphasis as u8) << 1)
    }

    /// Get the de-emphasis filter.
    ///
    /// See [`Codec::set_de_emphasis`]
    pub fn get_de_emphasis(&self) -> DeEmphasis {
        match self.get_register_bits(Register::Control2, DEM) >> 1 {
            0b00 => DeEmphasis::Khz44_1,
            0b01 => DeEmphasis::Off,
            0b10 => DeEmphasis::Khz48,
            _ => DeEmphasis::Khz32,
        }
    }

    /// Select the digital filter roll-off.
    ///
    /// The three select bits live in three different registers.
    pub fn set_roll_off(&mut self, roll_off: RollOff) -> Result<(), Error<B::Error>> {
        // (SD, SLOW, SSLOW)
        let (sd, slow, sslow) = match roll_off {
            RollOff::Sharp => (false, false, false),
            RollOff::Slow => (false, true, false),
            RollOff::ShortDelaySharp => (true, false, false),
            RollOff::ShortDelaySlow => (true, true, false),
            RollOff::SuperSlow => (false, false, true),
        };
        self.regs
            .update_bits(Register::Control2, SD, if sd { SD } else { 0 })?;
        self.regs
            .update_bits(Register::Control3, SLOW, if slow { SLOW } else { 0 })?;
        self.regs
            .update_bits(Register::Control4, SSLOW, if sslow { SSLOW } else { 0 })
    }

    /// Get the digital filter roll-off.
    ///
    /// See [`Codec::set_roll_off`]
    pub fn get_roll_off(&self) -> RollOff {
        if self.get_register_bits(Register::Control4, SSLOW) != 0 {
            // SSLOW overrides the other two
            return RollOff::SuperSlow;
        }
        let sd = self.get_register_bits(Register::Control2, SD) != 0;
        let slow = self.get_register_bits(Register::Control3, SLOW) != 0;
        match (sd, slow) {
            (false, false) => RollOff::Sharp,
            (false, true) => RollOff::Slow,
            (true, false) => RollOff::ShortDelaySharp,
            (true, true) => RollOff::ShortDelaySlow,
        }
    }

    /// Select the sound quality preset.
    pub fn set_sound_setting(&mut self, setting: SoundSetting) -> Result<(), Error<B::Error>> {
        self.regs.update_bits(Register::Control7, SC, setting as u8)
    }

    /// Get the sound quality preset.
    pub fn get_sound_setting(&self) -> SoundSetting {
        match self.get_register_bits(Register::Control7, SC) {
            0b00 => SoundSetting::One,
            0b01 => SoundSetting::Two,
            // 0b11 is reserved and behaves as setting 3
            _ => SoundSetting::Three,
        }
    }

    /// Set output attenuation.
    ///
    /// * A value of 255 is 0 dB
    /// * A value of 1 is -127 dB
    /// * A value of 0 is muted
    ///
    /// There is 0.5 dB per step.
    pub fn set_attenuation(&mut self, level: u8, channel: Channel) -> Result<(), Error<B::Error>> {
        if channel == Channel::Left || channel == Channel::Both {
            self.regs.write(Register::LeftAttenuation, level)?;
        }
        if channel == Channel::Right || channel == Channel::Both {
            self.regs.write(Register::RightAttenuation, level)?;
        }
        Ok(())
    }

    /// Get output attenuation for both channels.
    ///
    /// See [`Codec::set_attenuation`]
    pub fn get_attenuation(&self) -> (u8, u8) {
        (
            self.get_register_bits(Register::LeftAttenuation, 0xFF),
            self.get_register_bits(Register::RightAttenuation, 0xFF),
        )
    }

    /// Read back bits of a register from the cache.
    fn get_register_bits(&self, register: Register, mask: u8) -> u8 {
        self.regs.cached(register).unwrap_or(0) & mask
    }
}

impl<B> CodecDai for Codec<B>
where
    B: RegisterBus,
{
    type Error = Error<B::Error>;

    fn set_format(&mut self, format: DaiFormat) -> Result<(), Self::Error> {
        Codec::set_format(self, format)
    }

    fn apply_parameters(&mut self, rate: u32, width: u8) -> Result<(), Self::Error> {
        Codec::apply_parameters(self, rate, width)
    }

    fn set_mute(&mut self, muted: bool) -> Result<(), Self::Error> {
        Codec::set_mute(self, muted)
    }

    fn set_bias_level(&mut self, level: BiasLevel) -> Result<(), Self::Error> {
        Codec::set_bias_level(self, level)
    }
}

//
// Tests
//


//
// End of file
//
