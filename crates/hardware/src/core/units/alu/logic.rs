//! ALU logical operations.
//!
//! NAND is the only logical primitive of the architecture. The default is the
//! full 16-bit bitwise NAND. [`NandSemantics::Logical`] reproduces the older
//! boolean behaviour, where the result collapses to `1` when either operand
//! is zero and to `0` otherwise.

use crate::config::NandSemantics;

/// Computes NAND of two words under the selected semantics.
#[inline]
pub const fn nand(a: u16, b: u16, semantics: NandSemantics) -> u16 {
    match semantics {
        NandSemantics::Bitwise => !(a & b),
        NandSemantics::Logical => (a == 0 || b == 0) as u16,
    }
}
