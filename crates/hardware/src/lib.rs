//! RiSC-16 emulator library.
//!
//! This crate implements an emulator for the RiSC-16 instructional architecture:
//! eight 16-bit registers, eight opcodes and 512 words of word-addressed memory.
//! 1. **Core:** Register file, program counter and the fetch-decode-execute loop.
//! 2. **ISA:** Bit-field decoding of the 16-bit instruction word and a disassembler.
//! 3. **Memory:** One fixed-size buffer holding program and data.
//! 4. **Simulation:** Image loader, configuration and statistics collection.

/// Common types and constants (addresses, registers, traps, access types).
pub mod common;
/// Emulator configuration (address policy, image byte order, NAND semantics).
pub mod config;
/// CPU core (registers, ALU, execution loop).
pub mod core;
/// Instruction set (opcodes, field extraction, decode, disassembly).
pub mod isa;
/// Program image loader and the simulator wrapper.
pub mod sim;
/// Machine storage (memory).
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// The machine; holds registers, program counter, memory and stats.
pub use crate::core::{Cpu, RunState};
/// Owns a machine for a run; construct with `Simulator::new`.
pub use crate::sim::Simulator;
