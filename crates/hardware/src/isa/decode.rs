//! RiSC-16 Instruction Decoder.
//!
//! This module handles the decoding of 16-bit instruction words into a
//! structured `Decoded` format. Decoding is pure bit extraction with fixed
//! field widths and positions; it never fails and never inspects the opcode.

use crate::common::constants::WORD_BITS;
use crate::isa::instruction::{Decoded, InstructionBits};

/// Decodes an instruction word into its component fields.
///
/// # Examples
///
/// ```
/// use risc16_core::isa::decode::decode;
///
/// // addi r1, r0, -1
/// let d = decode(0b001_001_000_1111111);
/// assert_eq!(d.opcode, 1);
/// assert_eq!(d.ra, 1);
/// assert_eq!(d.rb, 0);
/// assert_eq!(d.imm7, 0xFFFF);
/// ```
pub fn decode(inst: u16) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        ra: inst.reg_a(),
        rb: inst.reg_b(),
        rc: inst.reg_c(),
        imm7: inst.imm7(),
        imm10: inst.imm10(),
    }
}

/// Sign extends the low `bits` bits of `val` to a full 16-bit word.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val` (1-16).
pub const fn sign_extend(val: u16, bits: u32) -> u16 {
    let shift = WORD_BITS - bits;
    (((val << shift) as i16) >> shift) as u16
}
