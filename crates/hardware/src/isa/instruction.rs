//! Instruction field extraction.
//!
//! Provides bit extraction functions and the decoded instruction structure
//! for the 16-bit RiSC-16 instruction word.

use crate::common::constants::{
    FIELD3_MASK, IMM7_BITS, IMM7_MASK, IMM10_MASK, OPCODE_SHIFT, REG_A_SHIFT, REG_B_SHIFT,
};
use crate::isa::decode::sign_extend;

/// Trait for extracting instruction fields from an encoded instruction word.
///
/// No validation is performed: unused bits for a given opcode are ignored,
/// and every field is extracted regardless of the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 15-13).
    fn opcode(&self) -> u16;

    /// Extracts the regA field (bits 12-10).
    fn reg_a(&self) -> usize;

    /// Extracts the regB field (bits 9-7).
    fn reg_b(&self) -> usize;

    /// Extracts the regC field (bits 2-0). Only meaningful for R-type.
    fn reg_c(&self) -> usize;

    /// Extracts the 7-bit immediate (bits 6-0) sign-extended to 16 bits.
    fn imm7(&self) -> u16;

    /// Extracts the 10-bit unsigned immediate (bits 9-0).
    fn imm10(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & FIELD3_MASK
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & FIELD3_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & FIELD3_MASK) as usize
    }

    #[inline(always)]
    fn reg_c(&self) -> usize {
        (self & FIELD3_MASK) as usize
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        sign_extend(self & IMM7_MASK, IMM7_BITS)
    }

    #[inline(always)]
    fn imm10(&self) -> u16 {
        self & IMM10_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// `opcode` holds the raw field value; mapping it to an operation is left to
/// the dispatcher so that an unmatched value reaches its explicit illegal arm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 16-bit instruction word.
    pub raw: u16,
    /// Opcode field.
    pub opcode: u16,
    /// regA index.
    pub ra: usize,
    /// regB index.
    pub rb: usize,
    /// regC index.
    pub rc: usize,
    /// Sign-extended 7-bit immediate.
    pub imm7: u16,
    /// Unsigned 10-bit immediate.
    pub imm10: u16,
}

impl Decoded {
    /// Returns the 7-bit immediate as a signed displacement (-64..=63).
    pub const fn displacement(&self) -> i16 {
        self.imm7 as i16
    }
}
