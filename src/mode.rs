//! The table of stream modes the AK4490 and the NS4490 clock generator can run
//! in.

use crate::registers::*;

//
// Public Types
//

/// Register values that realise one sample rate and width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeEntry {
    /// Sample rate in Hz
    pub rate: u32,
    /// Sample width in bits
    pub width: u8,
    /// Clock divider select: set for the 48 kHz family of rates, clear for
    /// the 44.1 kHz family. Mirrored in `clkgen` as [`CLKGEN_48K`].
    pub clock_div: bool,
    /// Interface format for Control 1 (DIF2:0, in place)
    pub dif: u8,
    /// DFS1:0 for Control 2, in place
    pub dfsl: u8,
    /// DFS2 for Control 4, in place
    pub dfsh: u8,
    /// Frequency select for the clock generator, without the enable bit
    pub clkgen: u8,
    /// Bit clocks per frame the CPU side must produce
    pub bclk_ratio: u32,
}

//
// Public Data
//

/// Every stream mode we support, in lookup order.
///
/// 16-bit streams use 16/24-bit I²S in 32fs frames. 24 and 32-bit streams
/// both use 32-bit I²S in 64fs frames. There are no 20-bit modes: the board's
/// I²S frames carry 16, 24 or 32-bit samples only.
pub const MODE_TABLE: [ModeEntry; 18] = [
    entry(44_100, 16, false, DIF_I2S24, DFSL_NORMAL, CLKGEN_1X, 32),
    entry(44_100, 24, false, DIF_I2S32, DFSL_NORMAL, CLKGEN_1X | CLKGEN_SLOT32, 64),
    entry(44_100, 32, false, DIF_I2S32, DFSL_NORMAL, CLKGEN_1X | CLKGEN_SLOT32, 64),
    entry(48_000, 16, true, DIF_I2S24, DFSL_NORMAL, CLKGEN_1X, 32),
    entry(48_000, 24, true, DIF_I2S32, DFSL_NORMAL, CLKGEN_1X | CLKGEN_SLOT32, 64),
    entry(48_000, 32, true, DIF_I2S32, DFSL_NORMAL, CLKGEN_1X | CLKGEN_SLOT32, 64),
    entry(88_200, 16, false, DIF_I2S24, DFSL_DOUBLE, CLKGEN_2X, 32),
    entry(88_200, 24, false, DIF_I2S32, DFSL_DOUBLE, CLKGEN_2X | CLKGEN_SLOT32, 64),
    entry(88_200, 32, false, DIF_I2S32, DFSL_DOUBLE, CLKGEN_2X | CLKGEN_SLOT32, 64),
    entry(96_000, 16, true, DIF_I2S24, DFSL_DOUBLE, CLKGEN_2X, 32),
    entry(96_000, 24, true, DIF_I2S32, DFSL_DOUBLE, CLKGEN_2X | CLKGEN_SLOT32, 64),
    entry(96_000, 32, true, DIF_I2S32, DFSL_DOUBLE, CLKGEN_2X | CLKGEN_SLOT32, 64),
    entry(176_400, 16, false, DIF_I2S24, DFSL_QUAD, CLKGEN_4X, 32),
    entry(176_400, 24, false, DIF_I2S32, DFSL_QUAD, CLKGEN_4X | CLKGEN_SLOT32, 64),
    entry(176_400, 32, false, DIF_I2S32, DFSL_QUAD, CLKGEN_4X | CLKGEN_SLOT32, 64),
    entry(192_000, 16, true, DIF_I2S24, DFSL_QUAD, CLKGEN_4X, 32),
    entry(192_000, 24, true, DIF_I2S32, DFSL_QUAD, CLKGEN_4X | CLKGEN_SLOT32, 64),
    entry(192_000, 32, true, DIF_I2S32, DFSL_QUAD, CLKGEN_4X | CLKGEN_SLOT32, 64),
];

//
// Public Functions
//

/// Find the mode for a sample rate and width.
///
/// Only an exact match counts. Returns `None` for anything not in
/// [`MODE_TABLE`].
pub fn resolve(rate: u32, width: u8) -> Option<&'static ModeEntry> {
    MODE_TABLE
        .iter()
        .find(|mode| mode.rate == rate && mode.width == width)
}

//
// Private Functions
//

const fn entry(
    rate: u32,
    width: u8,
    clock_div: bool,
    dif: u8,
    dfsl: u8,
    clkgen: u8,
    bclk_ratio: u32,
) -> ModeEntry {
    ModeEntry {
        rate,
        width,
        clock_div,
        dif,
        dfsl,
        dfsh: DFSH_LOW,
        clkgen: if clock_div { clkgen | CLKGEN_48K } else { clkgen },
        bclk_ratio,
    }
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_resolves_to_itself() {
        for mode in MODE_TABLE.iter() {
            assert_eq!(resolve(mode.rate, mode.width), Some(mode));
        }
    }

    #[test]
    fn no_duplicate_entries() {
        for (i, a) in MODE_TABLE.iter().enumerate() {
            for b in MODE_TABLE.iter().skip(i + 1) {
                assert!(
                    (a.rate, a.width) != (b.rate, b.width),
                    "duplicate mode {} Hz / {} bits",
                    a.rate,
                    a.width
                );
            }
        }
    }

    #[test]
    fn cd_quality() {
        let mode = resolve(44_100, 16).unwrap();
        assert_eq!(mode.dif, DIF_I2S24);
        assert_eq!(mode.dfsl, DFSL_NORMAL);
        assert!(!mode.clock_div);
        assert_eq!(mode.clkgen, CLKGEN_1X);
        assert_eq!(mode.bclk_ratio, 32);
    }

    #[test]
    fn high_resolution() {
        let mode = resolve(192_000, 32).unwrap();
        assert_eq!(mode.dif, DIF_I2S32);
        assert_eq!(mode.dfsl, DFSL_QUAD);
        assert!(mode.clock_div);
        assert_eq!(mode.clkgen, CLKGEN_4X | CLKGEN_SLOT32 | CLKGEN_48K);
        assert_eq!(mode.bclk_ratio, 64);
    }

    #[test]
    fn no_nearest_match() {
        assert_eq!(resolve(44_000, 16), None);
        assert_eq!(resolve(44_100, 20), None);
        assert_eq!(resolve(384_000, 32), None);
        assert_eq!(resolve(8_000, 16), None);
    }

    #[test]
    fn fields_stay_inside_their_masks() {
        for mode in MODE_TABLE.iter() {
            assert_eq!(mode.dif & !DIF, 0);
            assert_eq!(mode.dfsl & !DFSL, 0);
            assert_eq!(mode.dfsh & !DFSH, 0);
            assert_eq!(mode.clkgen & CLK, 0);
        }
    }

    #[test]
    fn clock_divider_follows_rate_family() {
        for mode in MODE_TABLE.iter() {
            assert_eq!(mode.clock_div, mode.rate % 48_000 == 0, "{} Hz", mode.rate);
            assert_eq!(mode.clkgen & CLKGEN_48K != 0, mode.clock_div);
        }
    }

    #[test]
    fn no_20_bit_modes() {
        assert!(MODE_TABLE.iter().all(|mode| mode.width != 20));
    }

    #[test]
    fn default_clock_generator_matches_cd_frame() {
        // Power-on value is 44.1 kHz, 1x, 32-bit slots
        let mode = resolve(44_100, 32).unwrap();
        assert_eq!(CLK_ENABLE | mode.clkgen, 0x88);
    }
}

//
// End of file
//
