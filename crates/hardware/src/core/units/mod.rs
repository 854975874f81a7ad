//! Execution units.
//!
//! The architecture has a single functional unit worth modelling separately:
//! the ALU shared by `add`, `addi` and `nand`. Address generation and branch
//! resolution live with the operations that use them in [`crate::core::cpu`].

/// Arithmetic Logic Unit.
pub mod alu;
