//! # Error Tests
//!
//! Checks the messages and conversions of `Trap`, `LoadError` and `ConfigError`.

use std::path::PathBuf;

use risc16_core::common::{AccessType, ConfigError, LoadError, Trap, WordAddr};

#[test]
fn illegal_instruction_message() {
    let trap = Trap::IllegalInstruction {
        pc: WordAddr::new(3),
        raw: 0x1234,
        opcode: 8,
    };
    assert_eq!(
        trap.to_string(),
        "illegal instruction 0x1234 (opcode 8) at pc 0x003"
    );
}

#[test]
fn address_overflow_message() {
    let trap = Trap::AddressOverflow {
        pc: WordAddr::new(1),
        addr: WordAddr::new(517),
        access: AccessType::Write,
    };
    assert_eq!(
        trap.to_string(),
        "address overflow: write of 0x205 from pc 0x001"
    );
}

#[test]
fn access_type_display() {
    assert_eq!(AccessType::Fetch.to_string(), "fetch");
    assert_eq!(AccessType::Read.to_string(), "read");
    assert_eq!(AccessType::Write.to_string(), "write");
}

#[test]
fn too_large_without_path() {
    let err = LoadError::TooLarge {
        path: None,
        size: 1025,
        max: 1024,
    };
    assert_eq!(
        err.to_string(),
        "program image is 1025 bytes; at most 1024 bytes fit in memory"
    );
}

#[test]
fn too_large_with_path() {
    let err = LoadError::TooLarge {
        path: Some(PathBuf::from("big.bin")),
        size: 2048,
        max: 1024,
    };
    assert_eq!(
        err.to_string(),
        "program image 'big.bin' is 2048 bytes; at most 1024 bytes fit in memory"
    );
}

#[test]
fn io_error_names_the_file() {
    let err = LoadError::Io {
        path: PathBuf::from("missing.bin"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("missing.bin"), "{msg}");
    assert!(msg.contains("not found"), "{msg}");
}

#[test]
fn config_parse_error_converts() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err = ConfigError::from(json_err);
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}
