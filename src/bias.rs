//! Bias (power) levels and the register sequences that move between them.
//!
//! Only two edges touch the hardware. Leaving OFF programs a full format and
//! clock configuration while the chip is held in reset, and only then lets go
//! of reset. Entering OFF does the same in reverse: reset first, then stop the
//! clock.

use crate::error::Error;
use crate::registers::*;
use crate::regmap::{RegisterBus, RegisterMap};

//
// Public Types
//

/// The codec's coarse power state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BiasLevel {
    /// Held in reset, clock stopped.
    Off,
    /// Clocked and out of reset, no stream.
    Standby,
    /// A stream is about to start.
    Prepare,
    /// A stream is running.
    On,
}

//
// impls on Public Types
//

impl BiasLevel {
    /// Whether the codec may move straight from `self` to `to`.
    ///
    /// Requesting the current level is always allowed and does nothing.
    pub fn can_transition_to(self, to: BiasLevel) -> bool {
        use BiasLevel::*;
        matches!(
            (self, to),
            (Off, Off)
                | (Standby, Standby)
                | (Prepare, Prepare)
                | (On, On)
                | (Off, Standby)
                | (Standby, Prepare)
                | (Prepare, On)
                | (On, Prepare)
                | (Prepare, Standby)
                | (On, Standby)
                | (Standby, Off)
                | (Prepare, Off)
                | (On, Off)
        )
    }
}

//
// Public Functions
//

/// Drive the registers for a move from `from` to `to`.
///
/// Checks the edge first and touches nothing if it is not allowed. Stops at
/// the first failed register operation.
pub fn transition<B>(
    regs: &mut RegisterMap<B, Register>,
    from: BiasLevel,
    to: BiasLevel,
) -> Result<(), Error<B::Error>>
where
    B: RegisterBus,
{
    if !from.can_transition_to(to) {
        return Err(Error::InvalidTransition { from, to });
    }
    match (from, to) {
        (BiasLevel::Off, BiasLevel::Standby) => power_up(regs),
        (f, BiasLevel::Off) if f != BiasLevel::Off => power_down(regs),
        _ => Ok(()),
    }
}

/// Whether moving from `from` to `to` puts the chip through reset and
/// reprograms its clock generator.
///
/// After such a move the chip is no longer in whatever stream mode it was
/// configured for.
pub fn resets_chip(from: BiasLevel, to: BiasLevel) -> bool {
    matches!(
        (from, to),
        (BiasLevel::Off, BiasLevel::Standby)
            | (BiasLevel::Standby | BiasLevel::Prepare | BiasLevel::On, BiasLevel::Off)
    )
}

//
// Private Functions
//

fn power_up<B>(regs: &mut RegisterMap<B, Register>) -> Result<(), Error<B::Error>>
where
    B: RegisterBus,
{
    regs.write(Register::Control1, ACKS_MANUAL | DIF_I2S32 | RSTN_RESET)?;
    regs.write(Register::ExtClkGen, CLK_ENABLE)?;
    regs.update_bits(Register::Control1, RSTN, RSTN_NORMAL)
}

fn power_down<B>(regs: &mut RegisterMap<B, Register>) -> Result<(), Error<B::Error>>
where
    B: RegisterBus,
{
    regs.update_bits(Register::Control1, RSTN, RSTN_RESET)?;
    regs.update_bits(Register::ExtClkGen, CLK, CLK_DISABLE)
}

//
// Tests
//


//
// End of file
//
