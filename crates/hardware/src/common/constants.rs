//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Memory size in words and the program image byte limit.
//! 2. **Register Constants:** Register count and the hardwired zero register.
//! 3. **Instruction Constants:** Field shifts and masks for the 16-bit instruction word.

/// Number of 16-bit words in simulated memory.
pub const MEM_SIZE: usize = 512;

/// Largest accepted program image, in bytes (one image fills all of memory).
pub const MAX_IMAGE_BYTES: usize = MEM_SIZE * 2;

/// Number of architectural registers.
pub const NUM_REGS: usize = 8;

/// Width of an instruction or data word in bits.
pub const WORD_BITS: u32 = 16;

/// Bit position of the opcode field (bits 15-13).
pub const OPCODE_SHIFT: u32 = 13;

/// Bit position of the regA field (bits 12-10).
pub const REG_A_SHIFT: u32 = 10;

/// Bit position of the regB field (bits 9-7).
pub const REG_B_SHIFT: u32 = 7;

/// Mask for any 3-bit field (opcode or register selector) once shifted down.
pub const FIELD3_MASK: u16 = 0x7;

/// Number of bits in the signed I-type immediate.
pub const IMM7_BITS: u32 = 7;

/// Mask for the 7-bit signed immediate (bits 6-0).
pub const IMM7_MASK: u16 = 0x7F;

/// Mask for the 10-bit unsigned immediate (bits 9-0).
pub const IMM10_MASK: u16 = 0x3FF;

/// Left shift applied by `lui` to place the 10-bit immediate in the upper bits.
pub const LUI_SHIFT: u32 = 6;

/// Left shift applied to the base register when forming a load/store address.
pub const ADDR_BASE_SHIFT: u32 = 8;
