//! Digital audio interface format checks.
//!
//! The AK4490's interface format comes from the mode table, so the only parts
//! of a DAI format that matter here are the clock polarities and who drives
//! the clocks. The NS4490 wiring needs both clocks non-inverted, with the
//! codec receiving the bit clock and the frame clock.

//
// Public Types
//

/// Framing of the serial audio data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    /// I²S (MSB first, `left-1` aligned)
    I2s,
    /// MSB first, left aligned
    LeftJustified,
    /// MSB first, right aligned
    RightJustified,
    /// Frame sync followed by two data words
    Dsp,
}

/// Which clock edges are inverted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockInversion {
    /// Normal bit clock, normal frame clock
    NormalBitNormalFrame,
    /// Normal bit clock, inverted frame clock
    NormalBitInvertedFrame,
    /// Inverted bit clock, normal frame clock
    InvertedBitNormalFrame,
    /// Inverted bit clock, inverted frame clock
    InvertedBitInvertedFrame,
}

/// Which side generates the bit clock and the frame clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockRole {
    /// Codec generates both clocks. The documentation uses an archaic term
    /// beginning with M.
    CodecProvider,
    /// Codec generates the bit clock and receives the frame clock.
    CodecBitProvider,
    /// Codec receives the bit clock and generates the frame clock.
    CodecFrameProvider,
    /// Codec receives both clocks.
    CodecConsumer,
}

/// A digital audio interface format, as requested by the audio framework.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DaiFormat {
    /// Data framing
    pub protocol: Protocol,
    /// Clock polarity
    pub inversion: ClockInversion,
    /// Clock direction
    pub role: ClockRole,
}

/// Why a [`DaiFormat`] was refused.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// One or both clocks are inverted.
    InvertedClock,
    /// The codec would have to generate both clocks.
    ClockMaster,
    /// The codec would have to generate one of the clocks.
    MixedRole,
}

//
// Public Data
//

/// The only format the NS4490 board runs.
pub const NS4490_DAI_FORMAT: DaiFormat = DaiFormat {
    protocol: Protocol::I2s,
    inversion: ClockInversion::NormalBitNormalFrame,
    role: ClockRole::CodecConsumer,
};

//
// Public Functions
//

/// Check a format against what the AK4490 on this board can do.
///
/// Touches no hardware.
pub fn validate(format: &DaiFormat) -> Result<(), FormatError> {
    if format.inversion != ClockInversion::NormalBitNormalFrame {
        return Err(FormatError::InvertedClock);
    }
    match format.role {
        ClockRole::CodecConsumer => Ok(()),
        ClockRole::CodecProvider => Err(FormatError::ClockMaster),
        ClockRole::CodecBitProvider | ClockRole::CodecFrameProvider => Err(FormatError::MixedRole),
    }
}

//
// impls on Public Types
//

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            FormatError::InvertedClock => "clock inversion is not supported",
            FormatError::ClockMaster => "codec cannot be clock master",
            FormatError::MixedRole => "codec must receive both clocks",
        };
        f.write_str(text)
    }
}

//
// Tests
//


//
// End of file
//
