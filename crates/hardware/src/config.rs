//! Configuration system for the emulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! the machine. It provides:
//! 1. **Structures:** Hierarchical config for memory and execution behaviour.
//! 2. **Enums:** Address overflow policy, image byte order and NAND semantics.
//! 3. **Loading:** Deserialization from JSON text or a JSON file.
//!
//! Every field has a default, so an empty document `{}` is a valid configuration
//! and `Config::default()` is what the CLI uses when no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// What happens when `lw`/`sw` compute an address outside memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AddressPolicy {
    /// Reduce the address modulo the memory size.
    #[default]
    Wrap,
    /// Halt the machine with an address overflow trap.
    Trap,
}

/// Byte order of 16-bit words in a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Result semantics of the `nand` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NandSemantics {
    /// Full 16-bit bitwise NAND.
    #[default]
    Bitwise,
    /// Boolean NAND: `1` when either operand is zero, else `0`.
    Logical,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use risc16_core::config::{AddressPolicy, ByteOrder, Config, NandSemantics};
///
/// let config = Config::default();
/// assert_eq!(config.memory.address_policy, AddressPolicy::Wrap);
///
/// let json = r#"{
///     "memory": { "address_policy": "Trap", "byte_order": "Big" },
///     "execution": { "nand": "Logical" }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.memory.address_policy, AddressPolicy::Trap);
/// assert_eq!(config.memory.byte_order, ByteOrder::Big);
/// assert_eq!(config.execution.nand, NandSemantics::Logical);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Memory behaviour.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Instruction semantics.
    #[serde(default)]
    pub execution: ExecutionConfig,
}

/// Memory behaviour settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Policy for out-of-range load/store addresses.
    #[serde(default)]
    pub address_policy: AddressPolicy,
    /// Byte order of program images.
    #[serde(default)]
    pub byte_order: ByteOrder,
}

/// Instruction semantics settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Semantics of `nand`.
    #[serde(default)]
    pub nand: NandSemantics,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}
