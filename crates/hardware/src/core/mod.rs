//! Core processor implementation.
//!
//! This module contains the machine aggregate and the fetch-decode-execute loop,
//! the ALU it executes arithmetic on, and the raw architectural register storage.

/// Architectural state (register storage).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunState};
