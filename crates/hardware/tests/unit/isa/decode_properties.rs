//! # Decode Property Tests
//!
//! Field extraction must agree with the builder for every field combination,
//! and sign extension must preserve the value of every 7-bit immediate.

use proptest::prelude::*;
use risc16_core::isa::decode::{decode, sign_extend};
use risc16_core::isa::instruction::InstructionBits;

use crate::common::InstructionBuilder;

#[test]
fn sign_extend_negative_imm7() {
    assert_eq!(sign_extend(0x7F, 7), 0xFFFF);
    assert_eq!(sign_extend(0x40, 7), 0xFFC0);
}

#[test]
fn sign_extend_positive_imm7() {
    assert_eq!(sign_extend(0x3F, 7), 0x003F);
    assert_eq!(sign_extend(0x00, 7), 0x0000);
}

#[test]
fn decode_worked_example() {
    // addi r1, r0, -1
    let d = decode(0b001_001_000_1111111);
    assert_eq!(d.opcode, 1);
    assert_eq!(d.ra, 1);
    assert_eq!(d.rb, 0);
    assert_eq!(d.imm7, 0xFFFF);
    assert_eq!(d.displacement(), -1);
}

#[test]
fn decode_imm10() {
    let d = decode(0b011_010_1111111111);
    assert_eq!(d.opcode, 3);
    assert_eq!(d.ra, 2);
    assert_eq!(d.imm10, 0x3FF);
}

#[test]
fn decode_keeps_raw_word() {
    assert_eq!(decode(0xABCD).raw, 0xABCD);
}

proptest! {
    #[test]
    fn fields_round_trip_through_builder(
        op in 0u16..8,
        ra in 0u16..8,
        rb in 0u16..8,
        rc in 0u16..8,
    ) {
        let word = InstructionBuilder::new().opcode(op).ra(ra).rb(rb).rc(rc).build();
        let d = decode(word);
        prop_assert_eq!(d.opcode, op);
        prop_assert_eq!(d.ra, usize::from(ra));
        prop_assert_eq!(d.rb, usize::from(rb));
        prop_assert_eq!(d.rc, usize::from(rc));
    }

    #[test]
    fn imm7_preserves_signed_value(imm in -64i16..=63) {
        let word = InstructionBuilder::new().opcode(1).imm7(imm).build();
        prop_assert_eq!(decode(word).displacement(), imm);
    }

    #[test]
    fn imm10_is_unsigned(imm in 0u16..1024) {
        let word = InstructionBuilder::new().opcode(3).imm10(imm).build();
        prop_assert_eq!(word.imm10(), imm);
    }

    #[test]
    fn every_word_decodes_without_panicking(word in any::<u16>()) {
        let d = decode(word);
        prop_assert!(d.opcode < 8);
        prop_assert!(d.ra < 8 && d.rb < 8 && d.rc < 8);
        prop_assert_eq!(d.opcode, word.opcode());
        prop_assert!(d.imm10 < 1024);
    }
}
