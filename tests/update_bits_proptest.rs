//! Property tests for cached read-modify-write.

mod common;

use ak4490::{Register, RegisterMap};
use common::{FakeChip, Op};

proptest::proptest! {
    /// update_bits is a write of the cached value with the masked bits replaced.
    #[test]
    fn update_bits_matches_masked_write(cached in 0u8..=255u8, mask in 0u8..=255u8, value in 0u8..=255u8) {
        let chip = FakeChip::powered_on();
        let mut regs: RegisterMap<FakeChip, Register> = RegisterMap::with_defaults(chip.clone());
        regs.write(Register::Control3, cached).unwrap();
        chip.clear_log();

        regs.update_bits(Register::Control3, mask, value).unwrap();

        let expected = (cached & !mask) | (value & mask);
        assert_eq!(chip.log(), [Op::Write(Register::Control3, expected)]);
        assert_eq!(regs.read(Register::Control3).unwrap(), expected);
        assert_eq!(chip.get(Register::Control3), expected);
    }

    /// Reads always give back the last value the device accepted.
    #[test]
    fn read_returns_last_accepted_write(values in proptest::collection::vec((0u8..=255u8, proptest::bool::ANY), 1..20)) {
        let chip = FakeChip::powered_on();
        let mut regs: RegisterMap<FakeChip, Register> = RegisterMap::with_defaults(chip.clone());
        let mut last = 0xFF;
        for (value, fail) in values {
            if fail {
                chip.fail_at(0);
                assert!(regs.write(Register::LeftAttenuation, value).is_err());
            } else {
                regs.write(Register::LeftAttenuation, value).unwrap();
                last = value;
            }
            assert_eq!(regs.read(Register::LeftAttenuation).unwrap(), last);
        }
        // Every read came from the cache
        assert!(chip.log().iter().all(|op| matches!(op, Op::Write(..))));
    }
}
