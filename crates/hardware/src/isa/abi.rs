//! Register name constants.
//!
//! The architecture has no calling convention beyond the hardwired zero
//! register; these constants name indices for readability.

/// Register r0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register r1.
pub const REG_R1: usize = 1;
/// Register r2.
pub const REG_R2: usize = 2;
/// Register r3.
pub const REG_R3: usize = 3;
/// Register r4.
pub const REG_R4: usize = 4;
/// Register r5.
pub const REG_R5: usize = 5;
/// Register r6.
pub const REG_R6: usize = 6;
/// Register r7.
pub const REG_R7: usize = 7;

/// Assembly names for r0-r7.
pub const REG_NAMES: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

/// Returns the assembly name for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("r?")
}
