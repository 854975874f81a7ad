/// ALU add and NAND behaviour.
pub mod alu;
