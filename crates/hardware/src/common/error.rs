//! Trap and error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Trap Representation:** The causes that stop execution abnormally.
//! 2. **Load Errors:** Failures reading a program image before the first cycle.
//! 3. **Config Errors:** Failures reading or parsing a configuration document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::WordAddr;
use super::data::AccessType;

/// Conditions that halt the machine abnormally.
///
/// A trap is never retried; it is recorded in the terminal run state together with the
/// program counter of the instruction that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// The fetched word's opcode field did not match any defined operation.
    #[error("illegal instruction {raw:#06x} (opcode {opcode}) at pc {pc}")]
    IllegalInstruction {
        /// Address of the offending instruction.
        pc: WordAddr,
        /// Raw instruction word.
        raw: u16,
        /// Opcode field as presented to the dispatcher.
        opcode: u16,
    },

    /// A load or store computed an address outside memory while the
    /// trapping address policy was selected.
    #[error("address overflow: {access} of {addr} from pc {pc}")]
    AddressOverflow {
        /// Address of the instruction that computed the address.
        pc: WordAddr,
        /// The out-of-range address.
        addr: WordAddr,
        /// Kind of access attempted.
        access: AccessType,
    },
}

/// Failures loading a program image into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("unable to read program file '{}': {source}", .path.display())]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The image does not fit in simulated memory.
    #[error("program image{} is {size} bytes; at most {max} bytes fit in memory", describe(.path.as_ref()))]
    TooLarge {
        /// Path of the image, when it came from a file.
        path: Option<PathBuf>,
        /// Size of the rejected image in bytes.
        size: usize,
        /// Largest accepted size in bytes.
        max: usize,
    },
}

fn describe(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| format!(" '{}'", p.display()))
}

/// Failures reading emulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`crate::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("unable to read configuration '{}': {source}", .path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
