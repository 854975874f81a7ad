//! Load/Store Address Generation.
//!
//! Data addresses are formed as `(regB << 8) + sext(imm7)` in 16-bit wrapping
//! arithmetic. The result can land outside memory; what happens then is decided
//! by the configured [`AddressPolicy`].

use super::Cpu;
use crate::common::constants::ADDR_BASE_SHIFT;
use crate::common::error::Trap;
use crate::common::{AccessType, WordAddr};
use crate::config::AddressPolicy;

/// Computes the data address for `lw`/`sw`.
///
/// # Examples
///
/// ```
/// use risc16_core::core::cpu::memory::effective_address;
///
/// assert_eq!(effective_address(2, 5).val(), 517);
/// assert_eq!(effective_address(1, 0xFFFF).val(), 255);
/// ```
#[inline]
pub const fn effective_address(base: u16, imm7: u16) -> WordAddr {
    WordAddr::new((base << ADDR_BASE_SHIFT).wrapping_add(imm7))
}

impl Cpu {
    /// Maps a computed address onto memory according to the address policy.
    fn resolve(&self, addr: WordAddr, access: AccessType) -> Result<WordAddr, Trap> {
        if addr.index().is_some() {
            return Ok(addr);
        }
        match self.config().memory.address_policy {
            AddressPolicy::Wrap => Ok(addr.wrapped()),
            AddressPolicy::Trap => Err(self.overflow(addr, access)),
        }
    }

    fn overflow(&self, addr: WordAddr, access: AccessType) -> Trap {
        Trap::AddressOverflow {
            pc: WordAddr::new(self.pc),
            addr,
            access,
        }
    }

    /// Reads a data word.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOverflow`] if `addr` is outside memory and the
    /// trapping policy is selected.
    pub fn load_word(&self, addr: WordAddr) -> Result<u16, Trap> {
        let resolved = self.resolve(addr, AccessType::Read)?;
        self.mem
            .read(resolved)
            .ok_or_else(|| self.overflow(addr, AccessType::Read))
    }

    /// Writes a data word.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOverflow`] if `addr` is outside memory and the
    /// trapping policy is selected.
    pub fn store_word(&mut self, addr: WordAddr, val: u16) -> Result<(), Trap> {
        let resolved = self.resolve(addr, AccessType::Write)?;
        if self.mem.write(resolved, val) {
            Ok(())
        } else {
            Err(self.overflow(addr, AccessType::Write))
        }
    }

    /// Fetches the instruction word at the program counter, or `None` once the
    /// program counter has left memory.
    pub fn fetch(&self) -> Option<u16> {
        self.mem.read(WordAddr::new(self.pc))
    }
}
