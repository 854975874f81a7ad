//! RiSC-16 emulator CLI.
//!
//! Runs a raw program image to completion. It performs:
//! 1. **Argument handling:** Exactly one program path; anything else prints usage.
//! 2. **Loading:** Reads the image, rejecting files larger than memory.
//! 3. **Execution:** Runs until the program counter leaves memory or an illegal
//!    instruction is fetched, then optionally dumps registers and statistics.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use risc16_core::config::{AddressPolicy, ByteOrder, Config, NandSemantics};
use risc16_core::{RunState, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "risc16",
    author,
    version,
    about = "RiSC-16 emulator",
    long_about = "Load a raw RiSC-16 program image at address 0 and run it until the program \
                  counter leaves memory or an illegal instruction is fetched.\n\nExamples:\n  \
                  risc16 prog.bin\n  risc16 prog.bin --dump --stats\n  \
                  RUST_LOG=trace risc16 prog.bin"
)]
struct Cli {
    /// Program image to run (at most 1024 bytes).
    program: PathBuf,

    /// JSON configuration file; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read image words most significant byte first.
    #[arg(long)]
    big_endian: bool,

    /// Use boolean NAND (result 0 or 1) instead of bitwise NAND.
    #[arg(long)]
    nand_logical: bool,

    /// Halt on out-of-range load/store addresses instead of wrapping them.
    #[arg(long)]
    trap_on_overflow: bool,

    /// Print the registers when the program stops.
    #[arg(long)]
    dump: bool,

    /// Print execution statistics when the program stops.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                usage();
                return;
            }
        },
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    tracing::debug!("configuration: {config:?}");

    let mut sim = Simulator::new(config);
    if let Err(e) = sim.load(&cli.program) {
        eprintln!("{e}");
        return;
    }

    let state = sim.run();
    if let RunState::HaltedIllegal { pc, raw, .. } = &state {
        println!("SIG-ILL: illegal instruction {raw:#06x} at pc {pc}");
    } else if let RunState::Faulted(trap) = &state {
        eprintln!("[!] FAULT: {trap}");
    }

    if cli.dump {
        sim.cpu.dump_state();
    }
    if cli.stats {
        sim.cpu.stats.print();
    }
}

fn usage() {
    println!("usage: risc16 <program to run> [--config FILE] [--dump] [--stats]");
    println!("       risc16 --help  for full options");
}

/// Builds the configuration from the optional file, then applies flag overrides.
fn build_config(cli: &Cli) -> Result<Config, risc16_core::common::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.big_endian {
        config.memory.byte_order = ByteOrder::Big;
    }
    if cli.nand_logical {
        config.execution.nand = NandSemantics::Logical;
    }
    if cli.trap_on_overflow {
        config.memory.address_policy = AddressPolicy::Trap;
    }
    Ok(config)
}
