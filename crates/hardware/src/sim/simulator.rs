//! Simulator: owns the machine for the length of a run.
//!
//! The `Cpu` is created once, loaded, run to a terminal state and dropped with
//! the simulator on every exit path, including a failed load.

use std::path::Path;

use tracing::{info, warn};

use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::{Cpu, RunState};
use crate::sim::loader;

/// Top-level simulator wrapping a single machine.
#[derive(Debug, Default)]
pub struct Simulator {
    /// Machine state (registers, program counter, memory, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with an empty machine.
    pub fn new(config: Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Creates a simulator with `image` already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the image does not fit in memory.
    pub fn from_image(config: Config, image: &[u8]) -> Result<Self, LoadError> {
        let mut sim = Self::new(config);
        let _words = sim.cpu.load_image(image)?;
        Ok(sim)
    }

    /// Loads a program image from disk.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] raised while reading or placing the image.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        loader::load_program(&mut self.cpu, path)
    }

    /// Advances the machine by one instruction.
    pub fn tick(&mut self) -> &RunState {
        self.cpu.step()
    }

    /// Runs the machine to a terminal state and returns it.
    pub fn run(&mut self) -> RunState {
        let state = self.cpu.run().clone();
        match &state {
            RunState::HaltedNormal => info!(
                "program finished after {} instructions",
                self.cpu.stats.instructions_retired
            ),
            other => warn!("program stopped: {other}"),
        }
        state
    }
}
