//! Register sequences for bias level changes.

mod common;

use ak4490::registers::*;
use ak4490::{BiasLevel, Codec, CodecDai, Error, Register};
use common::{BusFault, FakeChip, Op};

#[test]
fn power_up_configures_before_releasing_reset() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    codec.set_bias_level(BiasLevel::Standby).unwrap();
    assert_eq!(
        chip.log(),
        [
            Op::Write(Register::Control1, ACKS_MANUAL | DIF_I2S32 | RSTN_RESET),
            Op::Write(Register::ExtClkGen, CLK_ENABLE),
            Op::Write(Register::Control1, ACKS_MANUAL | DIF_I2S32 | RSTN_NORMAL),
        ]
    );
    assert_eq!(codec.state().bias_level, BiasLevel::Standby);
}

#[test]
fn standby_and_back_leaves_reset_asserted_and_clock_stopped() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    codec.set_bias_level(BiasLevel::Standby).unwrap();
    chip.clear_log();
    codec.set_bias_level(BiasLevel::Off).unwrap();

    assert_eq!(
        chip.log(),
        [
            Op::Write(Register::Control1, DIF_I2S32 | RSTN_RESET),
            Op::Write(Register::ExtClkGen, CLK_DISABLE),
        ]
    );
    let regs = codec.registers();
    assert_eq!(regs.cached(Register::Control1).unwrap() & RSTN, RSTN_RESET);
    assert_eq!(regs.cached(Register::ExtClkGen).unwrap() & CLK, CLK_DISABLE);
    assert_eq!(chip.get(Register::Control1) & RSTN, RSTN_RESET);
    assert_eq!(chip.get(Register::ExtClkGen) & CLK, CLK_DISABLE);
}

#[test]
fn stream_levels_touch_no_registers() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    codec.set_bias_level(BiasLevel::Standby).unwrap();
    chip.clear_log();
    for level in [
        BiasLevel::Prepare,
        BiasLevel::On,
        BiasLevel::Prepare,
        BiasLevel::Standby,
        BiasLevel::Prepare,
        BiasLevel::On,
        BiasLevel::Standby,
    ] {
        codec.set_bias_level(level).unwrap();
        assert_eq!(codec.state().bias_level, level);
    }
    assert!(chip.log().is_empty());
}

#[test]
fn power_down_from_on() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    for level in [BiasLevel::Standby, BiasLevel::Prepare, BiasLevel::On] {
        codec.set_bias_level(level).unwrap();
    }
    codec.apply_parameters(96_000, 32).unwrap();
    chip.clear_log();
    codec.set_bias_level(BiasLevel::Off).unwrap();
    assert_eq!(
        chip.log(),
        [
            Op::Write(Register::Control1, DIF_I2S32 | RSTN_RESET),
            Op::Write(Register::ExtClkGen, CLKGEN_2X | CLKGEN_SLOT32 | CLKGEN_48K),
        ]
    );
}

#[test]
fn skipping_levels_is_refused() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    assert_eq!(
        codec.set_bias_level(BiasLevel::On),
        Err(Error::InvalidTransition {
            from: BiasLevel::Off,
            to: BiasLevel::On
        })
    );
    assert_eq!(
        codec.set_bias_level(BiasLevel::Prepare),
        Err(Error::InvalidTransition {
            from: BiasLevel::Off,
            to: BiasLevel::Prepare
        })
    );
    codec.set_bias_level(BiasLevel::Standby).unwrap();
    assert!(codec.set_bias_level(BiasLevel::On).is_err());
    assert_eq!(codec.state().bias_level, BiasLevel::Standby);
    assert_eq!(chip.log().len(), 3);
}

#[test]
fn off_to_off_does_nothing() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    codec.set_bias_level(BiasLevel::Off).unwrap();
    assert!(chip.log().is_empty());
}

#[test]
fn failed_power_up_stays_off() {
    for k in 0..3 {
        let chip = FakeChip::powered_on();
        let mut codec = Codec::new(chip.clone());
        chip.fail_at(k);
        match codec.set_bias_level(BiasLevel::Standby) {
            Err(Error::Io { source, .. }) => assert_eq!(source, BusFault),
            other => panic!("step {}: expected I/O error, got {:?}", k, other),
        }
        assert_eq!(codec.state().bias_level, BiasLevel::Off);
        assert_eq!(chip.log().len(), k);
    }
}

#[test]
fn failed_power_down_keeps_level() {
    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    codec.set_bias_level(BiasLevel::Standby).unwrap();
    chip.clear_log();
    chip.fail_at(1);
    assert!(codec.set_bias_level(BiasLevel::Off).is_err());
    assert_eq!(codec.state().bias_level, BiasLevel::Standby);
    // Reset went in, clock stop did not
    assert_eq!(chip.log(), [Op::Write(Register::Control1, DIF_I2S32 | RSTN_RESET)]);
}

#[test]
fn driven_through_the_dai_trait() {
    fn bring_up<C: CodecDai>(codec: &mut C) -> Result<(), C::Error> {
        codec.set_bias_level(BiasLevel::Standby)?;
        codec.set_format(ak4490::format::NS4490_DAI_FORMAT)?;
        codec.apply_parameters(48_000, 16)?;
        codec.set_bias_level(BiasLevel::Prepare)?;
        codec.set_bias_level(BiasLevel::On)?;
        codec.set_mute(false)
    }

    let chip = FakeChip::powered_on();
    let mut codec = Codec::new(chip.clone());
    bring_up(&mut codec).unwrap();
    assert_eq!(codec.state().bias_level, BiasLevel::On);
    assert_eq!(codec.state().rate, Some(48_000));
    assert_eq!(chip.get(Register::Control1) & RSTN, RSTN_NORMAL);
}
