//! # ALU Tests

use proptest::prelude::*;
use risc16_core::config::NandSemantics;
use risc16_core::core::units::alu::{Alu, AluOp};

#[test]
fn add_wraps() {
    let alu = Alu::default();
    assert_eq!(alu.execute(AluOp::Add, 0xFFFF, 1), 0);
    assert_eq!(alu.execute(AluOp::Add, 0x7FFF, 1), 0x8000);
}

#[test]
fn default_nand_is_bitwise() {
    let alu = Alu::default();
    assert_eq!(alu.execute(AluOp::Nand, 0xFFFF, 0xFFFF), 0);
    assert_eq!(alu.execute(AluOp::Nand, 0xAAAA, 0x5555), 0xFFFF);
}

#[test]
fn logical_nand() {
    let alu = Alu::new(NandSemantics::Logical);
    assert_eq!(alu.execute(AluOp::Nand, 0, 7), 1);
    assert_eq!(alu.execute(AluOp::Nand, 3, 7), 0);
    assert_eq!(alu.execute(AluOp::Add, 3, 7), 10, "add is unaffected");
}

proptest! {
    #[test]
    fn add_matches_wrapping_add(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(Alu::default().execute(AluOp::Add, a, b), a.wrapping_add(b));
    }

    #[test]
    fn add_commutes(a in any::<u16>(), b in any::<u16>()) {
        let alu = Alu::default();
        prop_assert_eq!(alu.execute(AluOp::Add, a, b), alu.execute(AluOp::Add, b, a));
    }

    #[test]
    fn bitwise_nand_matches_not_and(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(Alu::default().execute(AluOp::Nand, a, b), !(a & b));
    }

    #[test]
    fn logical_nand_is_boolean(a in any::<u16>(), b in any::<u16>()) {
        let r = Alu::new(NandSemantics::Logical).execute(AluOp::Nand, a, b);
        prop_assert!(r <= 1);
        prop_assert_eq!(r == 1, a == 0 || b == 0);
    }
}
