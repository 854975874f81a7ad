//! Instruction Disassembler for RiSC-16.
//!
//! Converts a 16-bit instruction word into a human-readable mnemonic
//! string for tracing, diagnostics and test failure messages.
//!
//! # Usage
//!
//! ```
//! use risc16_core::isa::disasm::disassemble;
//! let text = disassemble(0b001_001_000_0000101);
//! assert_eq!(text, "addi r1, r0, 5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::Decoded;
use crate::isa::opcodes::Opcode;

/// Disassembles an instruction word.
///
/// Immediates are printed as signed decimal for I-type and as hex for
/// `lui`. Returns `"illegal"` for an opcode field that names no operation.
pub fn disassemble(inst: u16) -> String {
    disassemble_decoded(&decode(inst))
}

/// Disassembles an already decoded instruction.
pub fn disassemble_decoded(d: &Decoded) -> String {
    let Some(op) = Opcode::from_bits(d.opcode) else {
        return format!("illegal {:#06x}", d.raw);
    };
    let m = op.mnemonic();
    let ra = reg_name(d.ra);
    let rb = reg_name(d.rb);

    match op {
        Opcode::Add | Opcode::Nand => format!("{m} {ra}, {rb}, {}", reg_name(d.rc)),
        Opcode::Addi | Opcode::Beq => format!("{m} {ra}, {rb}, {}", d.displacement()),
        Opcode::Sw | Opcode::Lw => format!("{m} {ra}, {}({rb})", d.displacement()),
        Opcode::Lui => format!("{m} {ra}, {:#x}", d.imm10),
        Opcode::Jalr => format!("{m} {ra}, {rb}"),
    }
}
