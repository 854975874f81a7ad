//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU used by the register-register and
//! register-immediate instructions. All arithmetic is modulo 2^16.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add
//! - [`logic`]:      Nand

/// Integer arithmetic operations.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

use crate::config::NandSemantics;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping 16-bit addition (`add`, `addi`).
    Add,
    /// NAND (`nand`).
    Nand,
}

/// Arithmetic Logic Unit for 16-bit operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu {
    nand: NandSemantics,
}

impl Alu {
    /// Creates an ALU using the given NAND semantics.
    pub const fn new(nand: NandSemantics) -> Self {
        Self { nand }
    }

    /// Executes an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use risc16_core::core::units::alu::{Alu, AluOp};
    ///
    /// let alu = Alu::default();
    /// assert_eq!(alu.execute(AluOp::Add, 0xFFFF, 2), 1);
    /// assert_eq!(alu.execute(AluOp::Nand, 0xFF00, 0x0FF0), 0xF0FF);
    /// ```
    pub fn execute(&self, op: AluOp, a: u16, b: u16) -> u16 {
        match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Nand => logic::nand(a, b, self.nand),
        }
    }
}
