//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the word at the program counter.
//! 2. **Decode:** Splits it into opcode, register selectors and immediates.
//! 3. **Dispatch:** Runs the matching operation; an unmatched opcode halts the machine.
//! 4. **Advance:** Increments the program counter or takes the control transfer, then
//!    halts normally once the program counter leaves memory.

use tracing::{debug, info, trace, warn};

use super::memory::effective_address;
use super::{Cpu, RunState};
use crate::common::WordAddr;
use crate::common::constants::LUI_SHIFT;
use crate::common::error::Trap;
use crate::core::units::alu::AluOp;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble_decoded;
use crate::isa::instruction::Decoded;
use crate::isa::opcodes::Opcode;

/// How the program counter moves after an operation completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next sequential instruction.
    Next,
    /// Continue at the given address (taken `beq`, `jalr`).
    Jump(u16),
}

/// Computes the target of a taken branch: the instruction after the branch
/// plus the signed displacement, in 16-bit wrapping arithmetic.
#[inline]
pub const fn branch_target(pc: u16, imm7: u16) -> u16 {
    pc.wrapping_add(1).wrapping_add(imm7)
}

impl Cpu {
    /// Executes one full cycle: fetch, decode, dispatch, advance.
    ///
    /// Does nothing once the machine is in a terminal state.
    ///
    /// # Returns
    ///
    /// The run state after the cycle.
    pub fn step(&mut self) -> &RunState {
        if !self.is_running() {
            return &self.state;
        }

        let Some(raw) = self.fetch() else {
            self.halt_normal();
            return &self.state;
        };

        let decoded = decode(raw);
        self.dispatch(&decoded)
    }

    /// Steps until the machine reaches a terminal state.
    ///
    /// There is no cycle limit: a program that never leaves memory and never
    /// hits an illegal opcode runs forever.
    pub fn run(&mut self) -> &RunState {
        while self.is_running() {
            let _ = self.step();
        }
        &self.state
    }

    /// Executes an already decoded instruction at the current program counter
    /// and advances the machine.
    ///
    /// On a trap the program counter is left at the offending instruction.
    pub fn dispatch(&mut self, decoded: &Decoded) -> &RunState {
        if !self.is_running() {
            return &self.state;
        }

        trace!(
            "{:#05x}: {:#06x}  {}",
            self.pc,
            decoded.raw,
            disassemble_decoded(decoded)
        );

        match self.execute(decoded) {
            Ok(Flow::Next) => self.pc = self.pc.wrapping_add(1),
            Ok(Flow::Jump(target)) => {
                debug!("control transfer {:#05x} -> {:#05x}", self.pc, target);
                self.pc = target;
            }
            Err(trap) => {
                warn!("{trap}");
                self.state = RunState::from(trap);
                return &self.state;
            }
        }
        self.stats.instructions_retired += 1;

        if WordAddr::new(self.pc).index().is_none() {
            self.halt_normal();
        }
        &self.state
    }

    fn halt_normal(&mut self) {
        info!(
            "pc {:#06x} left memory after {} instructions; halting",
            self.pc, self.stats.instructions_retired
        );
        self.state = RunState::HaltedNormal;
    }

    /// Performs the operation selected by the opcode field.
    ///
    /// Reads and writes registers and memory but never touches the program
    /// counter; control transfers are reported through [`Flow::Jump`].
    ///
    /// # Errors
    ///
    /// Returns [`Trap::IllegalInstruction`] if the opcode names no operation and
    /// [`Trap::AddressOverflow`] if a load or store traps on its address.
    pub fn execute(&mut self, d: &Decoded) -> Result<Flow, Trap> {
        let Some(op) = Opcode::from_bits(d.opcode) else {
            return Err(Trap::IllegalInstruction {
                pc: WordAddr::new(self.pc),
                raw: d.raw,
                opcode: d.opcode,
            });
        };

        let flow = match op {
            Opcode::Add => {
                let (b, c) = (self.regs.read(d.rb), self.regs.read(d.rc));
                self.exec_alu(AluOp::Add, d.ra, b, c)
            }
            Opcode::Addi => {
                let b = self.regs.read(d.rb);
                self.exec_alu(AluOp::Add, d.ra, b, d.imm7)
            }
            Opcode::Nand => {
                let (b, c) = (self.regs.read(d.rb), self.regs.read(d.rc));
                self.exec_alu(AluOp::Nand, d.ra, b, c)
            }
            Opcode::Lui => {
                self.regs.write(d.ra, d.imm10 << LUI_SHIFT);
                self.stats.inst_alu += 1;
                Flow::Next
            }
            Opcode::Sw => {
                let addr = effective_address(self.regs.read(d.rb), d.imm7);
                self.store_word(addr, self.regs.read(d.ra))?;
                self.stats.inst_store += 1;
                Flow::Next
            }
            Opcode::Lw => {
                let addr = effective_address(self.regs.read(d.rb), d.imm7);
                let val = self.load_word(addr)?;
                debug!("lw {addr} -> {val:#06x}");
                self.regs.write(d.ra, val);
                self.stats.inst_load += 1;
                Flow::Next
            }
            Opcode::Beq => {
                if self.regs.read(d.ra) == self.regs.read(d.rb) {
                    self.stats.branches_taken += 1;
                    Flow::Jump(branch_target(self.pc, d.imm7))
                } else {
                    self.stats.branches_not_taken += 1;
                    Flow::Next
                }
            }
            Opcode::Jalr => {
                // Link before reading the target: with regA == regB the jump
                // goes to the freshly written link value.
                self.regs.write(d.ra, self.pc.wrapping_add(1));
                self.stats.inst_jump += 1;
                Flow::Jump(self.regs.read(d.rb))
            }
        };
        Ok(flow)
    }

    fn exec_alu(&mut self, op: AluOp, rd: usize, a: u16, b: u16) -> Flow {
        let result = self.alu.execute(op, a, b);
        self.regs.write(rd, result);
        self.stats.inst_alu += 1;
        Flow::Next
    }
}
