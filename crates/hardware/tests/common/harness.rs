use risc16_core::config::Config;
use risc16_core::core::{Cpu, RunState};

use super::builder::instruction::image_le;

/// A machine plus the conveniences tests need to drive it.
pub struct TestContext {
    pub cpu: Cpu,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Loads `words` at address 0 and resets the machine.
    ///
    /// The image is always serialized little-endian, so only use this with
    /// the default byte order.
    pub fn with_program(mut self, words: &[u16]) -> Self {
        let _ = self
            .cpu
            .load_image(&image_le(words))
            .expect("test program fits in memory");
        self
    }

    pub fn with_reg(mut self, reg: usize, val: u16) -> Self {
        self.cpu.regs.write(reg, val);
        self
    }

    pub fn with_pc(mut self, pc: u16) -> Self {
        self.cpu.pc = pc;
        self
    }

    /// Places a single word in memory without resetting the machine.
    pub fn with_word(mut self, addr: u16, val: u16) -> Self {
        assert!(self.cpu.mem.write(addr.into(), val), "address {addr} in range");
        self
    }

    pub fn step(&mut self) -> RunState {
        self.cpu.step().clone()
    }

    /// Steps `n` times, panicking if the machine stops early.
    pub fn step_n(&mut self, n: usize) {
        for i in 0..n {
            let state = self.step();
            assert!(
                i + 1 == n || state == RunState::Running,
                "machine stopped after {} steps: {state}",
                i + 1
            );
        }
    }

    pub fn run(&mut self) -> RunState {
        self.cpu.run().clone()
    }

    pub fn reg(&self, reg: usize) -> u16 {
        self.cpu.regs.read(reg)
    }

    pub fn mem(&self, addr: u16) -> u16 {
        self.cpu.mem.read(addr.into()).expect("address in range")
    }

    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }
}
