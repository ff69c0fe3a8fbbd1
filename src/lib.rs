//! # AK4490 Driver
//!
//! This is driver for the Asahi Kasei AK4490 stereo audio DAC, as fitted to
//! the NS4490 DAC board.
//!
//! Specifically, this driver is for setting the registers in the AK4490 over
//! I²C - this driver does not handle the digital audio interface (I²S, or
//! similar), it only tells you what bit clock ratio the I²S side needs.
//!
//! What it does handle is getting the chip from one stream format to another
//! without it ever seeing a half-written configuration:
//!
//! * [`mode`] maps a sample rate and width to register values
//! * [`regmap`] caches every register so reads and read-modify-writes don't
//!   touch the bus
//! * [`bias`] sequences reset and the clock generator on power up and down
//! * [`Codec::apply_parameters`] rewrites the format while the chip is held
//!   in reset
//! * [`reset`] pulses the chip's PDN line at attach time
//!
//! # Example
//!
//! You might bring up the board like this:
//!
//! ```rust
//! # struct I2c;
//! # impl embedded_hal::blocking::i2c::Write for I2c {
//! #     type Error = ();
//! #     fn write(&mut self, _address: u8, _bytes: &[u8]) -> Result<(), ()> {
//! #         Ok(())
//! #     }
//! # }
//! # impl embedded_hal::blocking::i2c::WriteRead for I2c {
//! #     type Error = ();
//! #     fn write_read(&mut self, _address: u8, _bytes: &[u8], buffer: &mut [u8]) -> Result<(), ()> {
//! #         buffer.fill(0);
//! #         Ok(())
//! #     }
//! # }
//! # struct Pin;
//! # impl embedded_hal::digital::v2::OutputPin for Pin {
//! #     type Error = ();
//! #     fn set_low(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), ()> { Ok(()) }
//! # }
//! # struct Delay;
//! # impl embedded_hal::blocking::delay::DelayMs<u8> for Delay {
//! #     fn delay_ms(&mut self, _ms: u8) {}
//! # }
//! use ak4490::{BiasLevel, I2cBus, BusAddress, Ns4490Dac};
//!
//! let bus = I2cBus::new(I2c, BusAddress::Cad00);
//! let mut board = match Ns4490Dac::attach(bus, Pin, &mut Delay) {
//!     Ok(board) => board,
//!     Err(_e) => return, // Can't reset the codec
//! };
//! board.codec_mut().set_bias_level(BiasLevel::Standby).unwrap();
//! board.open().unwrap();
//! let bclk_ratio = board.hw_params(96_000, 24).unwrap();
//! assert_eq!(bclk_ratio, 64);
//! board.codec_mut().set_mute(false).unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod bias;
pub mod board;
pub mod codec;
pub mod error;
pub mod format;
pub mod i2c;
pub mod mode;
pub mod registers;
pub mod regmap;
pub mod reset;

pub use bias::BiasLevel;
pub use board::Ns4490Dac;
pub use codec::{Channel, Codec, CodecDai, DeEmphasis, DeviceState, RollOff, SoundSetting};
pub use error::{Error, ResetError};
pub use format::{ClockInversion, ClockRole, DaiFormat, FormatError, Protocol};
pub use i2c::{BusAddress, I2cBus};
pub use mode::ModeEntry;
pub use registers::Register;
pub use regmap::{RegisterBus, RegisterMap, RegisterSpace};
pub use reset::ResetController;

//
// End of file
//
