//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Retirement:** Total instructions executed and host throughput.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** Taken and not-taken branch counts.

use std::time::Instant;

/// Execution statistics for one machine.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// Count of `add`, `addi`, `nand` and `lui` instructions.
    pub inst_alu: u64,
    /// Count of `lw` instructions.
    pub inst_load: u64,
    /// Count of `sw` instructions.
    pub inst_store: u64,
    /// Count of `beq` instructions whose condition held.
    pub branches_taken: u64,
    /// Count of `beq` instructions whose condition failed.
    pub branches_not_taken: u64,
    /// Count of `jalr` instructions.
    pub inst_jump: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            inst_jump: 0,
        }
    }
}

impl SimStats {
    /// Total `beq` instructions executed.
    pub const fn branches(&self) -> u64 {
        self.branches_taken + self.branches_not_taken
    }

    /// Prints a summary to stdout.
    #[allow(clippy::cast_precision_loss)]
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let kips = if seconds > 0.0 {
            self.instructions_retired as f64 / seconds / 1000.0
        } else {
            0.0
        };

        println!("==========================================");
        println!("RISC-16 EXECUTION STATISTICS");
        println!("==========================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_kips                 {kips:.2}");
        println!("------------------------------------------");
        println!("inst_alu                 {}", self.inst_alu);
        println!("inst_load                {}", self.inst_load);
        println!("inst_store               {}", self.inst_store);
        println!(
            "inst_branch              {} ({} taken)",
            self.branches(),
            self.branches_taken
        );
        println!("inst_jump                {}", self.inst_jump);
    }
}
