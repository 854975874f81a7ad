//! # Register Indexing Tests
//!
//! This module tests the `RegisterFile` structure: initialization, read/write
//! consistency, and the invariant that `r0` always reads as zero.

use proptest::prelude::*;
use risc16_core::common::NUM_REGS;
use risc16_core::common::reg::RegisterFile;
use risc16_core::core::arch::gpr::Gpr;

/// Ensures that all registers are initialized to zero upon creation.
#[test]
fn initial_values_are_zero() {
    let regs = RegisterFile::new();
    for i in 0..NUM_REGS {
        assert_eq!(regs.read(i), 0, "r{i} should be 0 initially");
    }
}

#[test]
fn write_and_read() {
    let mut regs = RegisterFile::new();
    regs.write(1, 42);
    assert_eq!(regs.read(1), 42);
}

/// Ensures that `r0` remains zero regardless of any value written to it.
#[test]
fn r0_always_zero() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xBEEF);
    assert_eq!(regs.read(0), 0, "r0 must always read as 0");
}

/// Verifies that r1-r7 hold independent values simultaneously.
#[test]
fn write_all_registers() {
    let mut regs = RegisterFile::new();
    for i in 0..NUM_REGS {
        regs.write(i, i as u16 * 100);
    }
    assert_eq!(
        regs.snapshot(),
        [0, 100, 200, 300, 400, 500, 600, 700],
        "r0 must remain 0"
    );
}

#[test]
fn gpr_storage_matches_register_file() {
    let mut gpr = Gpr::new();
    gpr.write(7, 0xFFFF);
    gpr.write(0, 1);
    assert_eq!(gpr.read(7), 0xFFFF);
    assert_eq!(gpr.read(0), 0);
}

proptest! {
    #[test]
    fn r0_ignores_every_value(val in any::<u16>()) {
        let mut regs = RegisterFile::new();
        regs.write(0, val);
        prop_assert_eq!(regs.read(0), 0);
    }

    #[test]
    fn nonzero_registers_hold_any_value(idx in 1usize..8, val in any::<u16>()) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val);
        prop_assert_eq!(regs.read(idx), val);
        for other in (0..NUM_REGS).filter(|&i| i != idx) {
            prop_assert_eq!(regs.read(other), 0);
        }
    }
}
