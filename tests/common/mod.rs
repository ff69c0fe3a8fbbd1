//! A fake AK4490 control port that records every transaction and can be told
//! to fail one of them.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ak4490::{Register, RegisterBus, RegisterSpace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Write(Register, u8),
    Read(Register),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Default)]
struct Inner {
    registers: [u8; 11],
    log: Vec<Op>,
    fail_at: Option<usize>,
}

/// Clones share the same fake chip.
#[derive(Clone, Default)]
pub struct FakeChip(Rc<RefCell<Inner>>);

impl FakeChip {
    /// A chip that has just come out of reset.
    pub fn powered_on() -> FakeChip {
        let chip = FakeChip::default();
        {
            let mut inner = chip.0.borrow_mut();
            for reg in Register::all() {
                inner.registers[reg.address() as usize] = reg.default_value().unwrap();
            }
        }
        chip
    }

    /// Make the `n`th transaction from now (counting from zero) fail.
    pub fn fail_at(&self, n: usize) {
        let mut inner = self.0.borrow_mut();
        inner.fail_at = Some(inner.log.len() + n);
    }

    pub fn log(&self) -> Vec<Op> {
        self.0.borrow().log.clone()
    }

    pub fn clear_log(&self) {
        self.0.borrow_mut().log.clear();
    }

    pub fn get(&self, register: Register) -> u8 {
        self.0.borrow().registers[register.address() as usize]
    }

    fn register(address: u8) -> Register {
        *Register::all()
            .iter()
            .find(|r| r.address() == address)
            .expect("no such register")
    }

    fn check(inner: &mut Inner) -> Result<(), BusFault> {
        if inner.fail_at == Some(inner.log.len()) {
            inner.fail_at = None;
            return Err(BusFault);
        }
        Ok(())
    }
}

impl RegisterBus for FakeChip {
    type Error = BusFault;

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), BusFault> {
        let mut inner = self.0.borrow_mut();
        FakeChip::check(&mut inner)?;
        inner.log.push(Op::Write(FakeChip::register(address), value));
        inner.registers[address as usize] = value;
        Ok(())
    }

    fn read_register(&mut self, address: u8) -> Result<u8, BusFault> {
        let mut inner = self.0.borrow_mut();
        FakeChip::check(&mut inner)?;
        inner.log.push(Op::Read(FakeChip::register(address)));
        Ok(inner.registers[address as usize])
    }
}
