//! AK4490 register map and bitfield constants.
//!
//! Registers 0x00 to 0x09 live in the AK4490 itself. Register 0x0A is not part
//! of the chip: it is the external clock generator on the NS4490 board, which
//! sits at the next address on the same bus and can only be written.

use crate::regmap::RegisterSpace;

//
// Public Types
//

/// The set of registers reachable through the AK4490's control port.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// ACKS, DIF2:0 and RSTN
    Control1 = 0x00,
    /// DZFE, DZFM, SD, DFS1:0, DEM1:0 and SMUTE
    Control2 = 0x01,
    /// DP, DCKS, DCKB, MONO, DZFB, SELLR and SLOW
    Control3 = 0x02,
    /// Left channel attenuation
    LeftAttenuation = 0x03,
    /// Right channel attenuation
    RightAttenuation = 0x04,
    /// INVL, INVR, DFS2 and SSLOW
    Control4 = 0x05,
    /// DSD configuration
    Control5 = 0x06,
    /// DSD configuration
    Control6 = 0x07,
    /// Sound setting
    Control7 = 0x08,
    /// Reserved / test
    Control8 = 0x09,
    /// Board clock generator: clock output enable and frequency select.
    ExtClkGen = 0x0A,
}

//
// Public Data
//

/// Control 1: auto clock select. Clear for manual mode.
pub const ACKS: u8 = 1 << 7;
/// Control 1: manual clock mode.
pub const ACKS_MANUAL: u8 = 0;
/// Control 1: digital interface format field.
pub const DIF: u8 = 0b111 << 1;
/// Control 1: 16-bit LSB justified.
pub const DIF_LSB16: u8 = 0b000 << 1;
/// Control 1: 24-bit MSB justified (power-on default).
pub const DIF_MSB24: u8 = 0b010 << 1;
/// Control 1: 16/24-bit I²S.
pub const DIF_I2S24: u8 = 0b011 << 1;
/// Control 1: 32-bit I²S.
pub const DIF_I2S32: u8 = 0b111 << 1;
/// Control 1: internal timing reset (active low).
pub const RSTN: u8 = 1 << 0;
/// Control 1: reset asserted.
pub const RSTN_RESET: u8 = 0;
/// Control 1: normal operation.
pub const RSTN_NORMAL: u8 = RSTN;

/// Control 2: short delay filter select.
pub const SD: u8 = 1 << 5;
/// Control 2: low-order sampling speed bits, DFS1:0.
pub const DFSL: u8 = 0b11 << 3;
/// Control 2: de-emphasis response.
pub const DEM: u8 = 0b11 << 1;
/// Control 2: soft mute.
pub const SMUTE: u8 = 1 << 0;

/// Control 3: slow roll-off filter select.
pub const SLOW: u8 = 1 << 0;

/// Control 4: high-order sampling speed bit, DFS2.
pub const DFSH: u8 = 1 << 1;
/// Control 4: super slow roll-off filter select.
pub const SSLOW: u8 = 1 << 0;

/// Control 7: sound setting.
pub const SC: u8 = 0b11;

/// DFS1:0 for normal speed (up to 54 kHz).
pub const DFSL_NORMAL: u8 = 0b00 << 3;
/// DFS1:0 for double speed (up to 108 kHz).
pub const DFSL_DOUBLE: u8 = 0b01 << 3;
/// DFS1:0 for quad speed (up to 216 kHz).
pub const DFSL_QUAD: u8 = 0b10 << 3;
/// DFS2 clear; every mode up to quad speed.
pub const DFSH_LOW: u8 = 0;

/// Clock generator: clock output.
pub const CLK: u8 = 1 << 7;
/// Clock generator: clock output running.
pub const CLK_ENABLE: u8 = CLK;
/// Clock generator: clock output stopped.
pub const CLK_DISABLE: u8 = 0;
/// Clock generator: oversampling multiplier field.
pub const CLKGEN_SPEED: u8 = 0b11 << 4;
/// Clock generator: 1x (normal speed).
pub const CLKGEN_1X: u8 = 0b00 << 4;
/// Clock generator: 2x (double speed).
pub const CLKGEN_2X: u8 = 0b01 << 4;
/// Clock generator: 4x (quad speed).
pub const CLKGEN_4X: u8 = 0b10 << 4;
/// Clock generator: 64fs bit clock (32-bit slots) when set, 32fs otherwise.
pub const CLKGEN_SLOT32: u8 = 1 << 3;
/// Clock generator: 48 kHz family when set, 44.1 kHz family otherwise.
pub const CLKGEN_48K: u8 = 1 << 2;

//
// Private Data
//

const ALL_REGISTERS: [Register; 11] = [
    Register::Control1,
    Register::Control2,
    Register::Control3,
    Register::LeftAttenuation,
    Register::RightAttenuation,
    Register::Control4,
    Register::Control5,
    Register::Control6,
    Register::Control7,
    Register::Control8,
    Register::ExtClkGen,
];

//
// impls on Public Types
//

impl RegisterSpace for Register {
    fn address(self) -> u8 {
        self as u8
    }

    fn is_readable(self) -> bool {
        self <= Register::Control8
    }

    fn is_writeable(self) -> bool {
        self <= Register::ExtClkGen
    }

    /// Power-on values, as per the datasheet.
    fn default_value(self) -> Option<u8> {
        Some(match self {
            // 24-bit MSB justified, reset asserted
            Register::Control1 => 0x04,
            // Short delay filter, de-emphasis off, not muted
            Register::Control2 => 0x22,
            Register::LeftAttenuation | Register::RightAttenuation => 0xFF,
            // Clock out, 44.1 kHz, 1x, 32-bit slots
            Register::ExtClkGen => 0x88,
            _ => 0x00,
        })
    }

    fn all() -> &'static [Self] {
        &ALL_REGISTERS
    }
}

//
// Tests
//


//
// End of file
//
