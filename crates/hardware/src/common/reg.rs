//! Register File.
//!
//! This module provides the `RegisterFile` struct, the accessor layer over the raw
//! architectural storage in [`Gpr`]. It provides:
//! 1. **Zero Register:** Reads of `r0` return 0 and writes to it are discarded.
//! 2. **Abstraction:** A single set of methods for reading and writing register values.
//! 3. **Observability:** Utilities for dumping and snapshotting register state.

use crate::common::constants::NUM_REGS;
use crate::core::arch::gpr::Gpr;

/// The eight-entry register file of the machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Register `r0` always returns 0.
    pub fn read(&self, idx: usize) -> u16 {
        self.gpr.read(idx)
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Writes to `r0` are ignored.
    /// * `val` - The 16-bit value to write.
    pub fn write(&mut self, idx: usize, val: u16) {
        self.gpr.write(idx, val);
    }

    /// Returns a copy of all register values, `r0` first.
    pub fn snapshot(&self) -> [u16; NUM_REGS] {
        std::array::from_fn(|i| self.read(i))
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        self.gpr.dump();
    }
}
