//! Common utilities and types used throughout the emulator.
//!
//! This module provides fundamental building blocks shared across all components. It includes:
//! 1. **Address Types:** A strong type for word addresses.
//! 2. **Constants:** Machine-wide sizes and instruction field layouts.
//! 3. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 4. **Error Handling:** Traps, load errors and configuration errors.
//! 5. **Register Management:** The register file accessor layer.

/// Word address type.
pub mod addr;

/// Machine-wide constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types and trap definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use addr::WordAddr;
pub use constants::{MAX_IMAGE_BYTES, MEM_SIZE, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, LoadError, Trap};
pub use reg::RegisterFile;
