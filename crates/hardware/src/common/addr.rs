//! Word Address type.
//!
//! Memory is word-addressed, so a single strong type covers instruction fetches
//! and data accesses alike. It provides the following:
//! 1. **Type Safety:** Keeps computed addresses distinct from register values.
//! 2. **Range Checks:** Tells whether an address falls inside simulated memory.
//! 3. **Wraparound:** Reduces an out-of-range address modulo the memory size.

use std::fmt;

use super::constants::MEM_SIZE;

/// A 16-bit word address.
///
/// Any 16-bit value is representable, but only `[0, MEM_SIZE)` maps to storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WordAddr(pub u16);

impl WordAddr {
    /// Creates a new address from a raw 16-bit value.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw 16-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the storage index for this address, or `None` when it lies
    /// outside simulated memory.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        let idx = self.0 as usize;
        if idx < MEM_SIZE { Some(idx) } else { None }
    }

    /// Returns the address reduced modulo the memory size.
    #[inline]
    pub const fn wrapped(self) -> Self {
        Self((self.0 as usize % MEM_SIZE) as u16)
    }
}

impl From<u16> for WordAddr {
    fn from(addr: u16) -> Self {
        Self(addr)
    }
}

impl fmt::Display for WordAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}
