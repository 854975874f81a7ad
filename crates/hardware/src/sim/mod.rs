//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the simulator that owns a machine
//! for the duration of a run.

/// Program image loader.
pub mod loader;

/// Simulator owning the machine.
pub mod simulator;

pub use simulator::Simulator;
