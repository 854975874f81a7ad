//! RiSC-16 architectural state.
//!
//! Holds the raw storage behind the architecturally visible registers.
//! The program counter lives on [`crate::core::Cpu`] itself.

/// General-Purpose Register storage.
pub mod gpr;
