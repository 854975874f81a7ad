//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owned aggregate of
//! all machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter and the run state.
//! 2. **Memory:** The word-addressed memory holding code and data.
//! 3. **Execution:** The fetch-decode-execute loop lives in [`execution`].
//! 4. **Address Generation:** Load/store address computation lives in [`memory`].

/// Fetch-decode-execute loop and per-opcode operations.
pub mod execution;

/// Load/store address generation and memory access policy.
pub mod memory;

use std::fmt;

use crate::common::error::{LoadError, Trap};
use crate::common::{RegisterFile, WordAddr};
use crate::config::Config;
use crate::core::units::alu::Alu;
use crate::soc::Memory;
use crate::stats::SimStats;

/// State of the fetch-execute loop.
///
/// `Running` is the only non-terminal state. Once a terminal state is reached no
/// further cycles execute until the machine is reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The machine will execute the instruction at `pc` on the next step.
    Running,
    /// The program counter left memory; this is the normal end of a program.
    HaltedNormal,
    /// The fetched opcode matched no operation. `pc` still addresses the
    /// offending instruction.
    HaltedIllegal {
        /// Address of the offending instruction.
        pc: WordAddr,
        /// Raw instruction word.
        raw: u16,
        /// Opcode field as presented to the dispatcher.
        opcode: u16,
    },
    /// A load or store trapped on an out-of-range address.
    Faulted(Trap),
}

impl RunState {
    /// Returns true for every state except `Running`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Returns the trap behind an abnormal halt, if any.
    pub fn trap(&self) -> Option<Trap> {
        match self {
            Self::Running | Self::HaltedNormal => None,
            Self::HaltedIllegal { pc, raw, opcode } => Some(Trap::IllegalInstruction {
                pc: *pc,
                raw: *raw,
                opcode: *opcode,
            }),
            Self::Faulted(trap) => Some(trap.clone()),
        }
    }
}

impl From<Trap> for RunState {
    fn from(trap: Trap) -> Self {
        match trap {
            Trap::IllegalInstruction { pc, raw, opcode } => Self::HaltedIllegal { pc, raw, opcode },
            other @ Trap::AddressOverflow { .. } => Self::Faulted(other),
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::HaltedNormal => write!(f, "halted"),
            Self::HaltedIllegal { pc, raw, .. } => {
                write!(f, "illegal instruction {raw:#06x} at pc {pc}")
            }
            Self::Faulted(trap) => write!(f, "faulted: {trap}"),
        }
    }
}

/// The machine: register file, program counter and memory.
///
/// Created once per run and exclusively owned by whoever drives
/// [`Cpu::step`]; every mutation goes through that single step function.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Register file (`r0`-`r7`).
    pub regs: RegisterFile,
    /// Program counter: address of the next instruction to fetch.
    pub pc: u16,
    /// Memory holding both the program and its data.
    pub mem: Memory,
    /// Execution statistics.
    pub stats: SimStats,
    state: RunState,
    config: Config,
    alu: Alu,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Cpu {
    /// Creates a machine with zeroed registers and memory, `pc = 0`, running.
    pub fn new(config: Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            mem: Memory::new(),
            stats: SimStats::default(),
            state: RunState::Running,
            config,
            alu: Alu::new(config.execution.nand),
        }
    }

    /// Returns the configuration the machine was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current run state.
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    /// Returns true while the machine has not reached a terminal state.
    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// Resets registers, program counter, statistics and run state.
    /// Memory is left as is.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.pc = 0;
        self.stats = SimStats::default();
        self.state = RunState::Running;
    }

    /// Copies a raw program image to address 0 and resets the machine.
    ///
    /// # Returns
    ///
    /// The number of words loaded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image does not fit in memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<usize, LoadError> {
        let words = self.mem.load_bytes(image, self.config.memory.byte_order)?;
        self.reset();
        Ok(words)
    }

    /// Dumps the program counter, run state and registers to stdout.
    pub fn dump_state(&self) {
        println!("pc={:#06x} state={}", self.pc, self.state);
        self.regs.dump();
    }
}
