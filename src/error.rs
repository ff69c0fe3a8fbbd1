//! Errors reported by the AK4490 driver.

use crate::bias::BiasLevel;
use crate::format::FormatError;

//
// Public Types
//

/// Everything that can go wrong talking to the AK4490.
///
/// `E` is the error type of the underlying register transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The sample rate and width combination is not in the mode table.
    NotSupported {
        /// Requested sample rate, in Hz
        rate: u32,
        /// Requested sample width, in bits
        width: u8,
    },
    /// The DAI format was rejected.
    InvalidFormat(FormatError),
    /// The register at this address cannot be written.
    NotWriteable(u8),
    /// The register at this address cannot be read.
    NotReadable(u8),
    /// The bias level cannot move directly between these two levels.
    InvalidTransition {
        /// Level the codec is at
        from: BiasLevel,
        /// Level that was requested
        to: BiasLevel,
    },
    /// The transport failed a register transaction.
    Io {
        /// Register address
        register: u8,
        /// Value being written, or `None` for a read
        value: Option<u8>,
        /// Transport error
        source: E,
    },
}

/// Failure driving the power-down (PDN) line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetError<E> {
    /// The GPIO refused to change level.
    Pin(E),
}

//
// impls on Public Types
//

impl<E> From<FormatError> for Error<E> {
    fn from(error: FormatError) -> Self {
        Error::InvalidFormat(error)
    }
}

impl<E> core::fmt::Display for Error<E>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NotSupported { rate, width } => {
                write!(f, "unsupported stream: rate {} Hz, width {} bits", rate, width)
            }
            Error::InvalidFormat(e) => write!(f, "invalid DAI format: {}", e),
            Error::NotWriteable(addr) => write!(f, "register 0x{:02x} is not writeable", addr),
            Error::NotReadable(addr) => write!(f, "register 0x{:02x} is not readable", addr),
            Error::InvalidTransition { from, to } => {
                write!(f, "bias level cannot go from {:?} to {:?}", from, to)
            }
            Error::Io {
                register,
                value: Some(value),
                source,
            } => write!(
                f,
                "writing 0x{:02x} to register 0x{:02x} failed: {:?}",
                value, register, source
            ),
            Error::Io {
                register,
                value: None,
                source,
            } => write!(f, "reading register 0x{:02x} failed: {:?}", register, source),
        }
    }
}

impl<E> core::fmt::Display for ResetError<E>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ResetError::Pin(e) => write!(f, "cannot drive the PDN line: {:?}", e),
        }
    }
}

//
// Tests
//


//
// End of file
//
