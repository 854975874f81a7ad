//! # Address Arithmetic Tests
//!
//! Tests for `WordAddr`: range checks against the 512-word memory, wrapping
//! and formatting.

use proptest::prelude::*;
use risc16_core::common::{MEM_SIZE, WordAddr};

#[test]
fn index_in_range() {
    assert_eq!(WordAddr::new(0).index(), Some(0));
    assert_eq!(WordAddr::new(511).index(), Some(511));
}

#[test]
fn index_out_of_range() {
    assert_eq!(WordAddr::new(512).index(), None);
    assert_eq!(WordAddr::new(0xFFFF).index(), None);
}

#[test]
fn wrapped_reduces_modulo_memory_size() {
    assert_eq!(WordAddr::new(517).wrapped(), WordAddr::new(5));
    assert_eq!(WordAddr::new(512).wrapped(), WordAddr::new(0));
    assert_eq!(WordAddr::new(0xFFFF).wrapped(), WordAddr::new(511));
}

#[test]
fn display_is_hex() {
    assert_eq!(WordAddr::new(5).to_string(), "0x005");
    assert_eq!(WordAddr::new(517).to_string(), "0x205");
}

#[test]
fn from_u16() {
    let addr: WordAddr = 42u16.into();
    assert_eq!(addr.val(), 42);
}

proptest! {
    #[test]
    fn wrapped_is_always_in_range(raw in any::<u16>()) {
        let wrapped = WordAddr::new(raw).wrapped();
        prop_assert!(wrapped.index().is_some());
        prop_assert_eq!(usize::from(wrapped.val()), usize::from(raw) % MEM_SIZE);
    }

    #[test]
    fn in_range_addresses_wrap_to_themselves(raw in 0u16..512) {
        prop_assert_eq!(WordAddr::new(raw).wrapped(), WordAddr::new(raw));
    }
}
