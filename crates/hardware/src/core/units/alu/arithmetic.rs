//! ALU arithmetic operations.
//!
//! Addition wraps on overflow; there is no carry flag and no overflow trap.

/// Adds two words modulo 2^16.
#[inline]
pub const fn add(a: u16, b: u16) -> u16 {
    a.wrapping_add(b)
}
