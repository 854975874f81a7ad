//! RiSC-16 General-Purpose Register storage.
//!
//! This module implements the register storage of the architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 8 sixteen-bit registers (`r0`-`r7`).
//! 2. **Invariant Enforcement:** Ensures that register `r0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::common::constants::NUM_REGS;

/// General-Purpose Register file.
///
/// Register `r0` is hardwired to zero and cannot be modified. Indices are
/// 3-bit fields, so any index is reduced to its low three bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u16; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value. Register `r0` always returns 0.
    pub fn read(&self, idx: usize) -> u16 {
        let idx = idx & (NUM_REGS - 1);
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register. Writes to `r0` are discarded.
    pub fn write(&mut self, idx: usize, val: u16) {
        let idx = idx & (NUM_REGS - 1);
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "r{}={:#06x} r{}={:#06x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            );
        }
    }
}
