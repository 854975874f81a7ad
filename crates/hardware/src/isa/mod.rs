//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, instruction field layouts, decoding
//! logic and a disassembler for the eight RiSC-16 operations.
//!
//! # Formats
//!
//! * R-type: `[opcode:3][regA:3][regB:3][unused:4][regC:3]` (`add`, `nand`)
//! * I-type: `[opcode:3][regA:3][regB:3][imm:7]` (`addi`, `sw`, `lw`, `beq`, `jalr`)
//! * U-type: `[opcode:3][regA:3][imm:10]` (`lui`)

/// Register name constants.
pub mod abi;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and the decoded instruction structure.
pub mod instruction;

/// Opcode constants and the operation enumeration.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits};
pub use opcodes::Opcode;
