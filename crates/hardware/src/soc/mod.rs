//! Machine storage components.
//!
//! The architecture has no bus, devices or memory-mapped I/O; the only
//! component outside the core is the word-addressed memory.

/// Simulated memory.
pub mod memory;

pub use memory::Memory;
