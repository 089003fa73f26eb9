//! RV32I interpreter CLI.
//!
//! This binary loads a flat program image and runs it. It performs:
//! 1. **Loading:** Reads the image from disk, or uses the built-in demo program.
//! 2. **Running:** Steps the CPU until the cycle budget is spent or the PC leaves memory.
//! 3. **Reporting:** Dumps registers and PC, and optionally prints statistics.
//!
//! A fetch outside memory dumps the state reached so far; it and every setup
//! error (unreadable or oversized image, bad configuration) exit with status 1.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv32sim_core::common::{Result, SimError};
use rv32sim_core::config::Config;
use rv32sim_core::sim::{RunOutcome, Simulator, demo, loader};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "RISC-V RV32I interpreter",
    long_about = "Load a flat binary at address 0 and interpret it.\n\nWithout FILE, a built-in demo program is run.\n\nExamples:\n  sim\n  sim program.bin --cycles 1000 --stats\n  RUST_LOG=trace sim program.bin --trace"
)]
struct Cli {
    /// Flat binary image loaded at address 0.
    file: Option<PathBuf>,

    /// Number of cycles to run (default: the smaller of the configured budget and the image size).
    #[arg(short, long)]
    cycles: Option<u64>,

    /// Memory capacity in bytes.
    #[arg(long)]
    ram_size: Option<usize>,

    /// JSON configuration file.
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Trace every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Print the run outcome and statistics as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut sim = match setup(&cli) {
        Ok(sim) => sim,
        Err(e) => {
            error!("{e}");
            eprintln!("\n[!] FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    match sim.run() {
        Ok(outcome) => {
            report(&cli, &sim, Some(&outcome));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            report(&cli, &sim, None);
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Builds the configuration and simulator from the command line.
fn setup(cli: &Cli) -> Result<Simulator> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| SimError::Io {
                path: path.clone(),
                source,
            })?;
            Config::from_json(&json)?
        }
        None => Config::default(),
    };
    if let Some(size) = cli.ram_size {
        config.memory.ram_size = size;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }

    let image = match &cli.file {
        Some(path) => loader::load_binary(path)?,
        None => demo::program(),
    };

    // Default budget: one cycle per image byte, capped by the configured maximum.
    config.general.max_cycles = cli
        .cycles
        .unwrap_or_else(|| config.general.max_cycles.min(image.len() as u64));

    if !cli.json {
        match &cli.file {
            Some(path) => println!("[*] Direct execution: {}", path.display()),
            None => println!("[*] Demo program"),
        }
        println!(
            "    image: {} bytes  RAM: {} bytes  cycles: {}",
            image.len(),
            config.memory.ram_size,
            config.general.max_cycles
        );
    }

    Simulator::new(&image, &config)
}

/// Prints the final state, and statistics if requested.
fn report(cli: &Cli, sim: &Simulator, outcome: Option<&RunOutcome>) {
    if cli.json {
        let doc = serde_json::json!({
            "outcome": outcome,
            "pc": sim.cpu.pc,
            "regs": sim.cpu.regs.snapshot(),
            "stats": &sim.cpu.stats,
        });
        match serde_json::to_string_pretty(&doc) {
            Ok(text) => println!("{text}"),
            Err(e) => error!("could not serialize report: {e}"),
        }
        return;
    }

    if let Some(outcome) = outcome {
        println!(
            "\n[*] Stopped after {} cycles ({:?})",
            outcome.cycles, outcome.reason
        );
    }
    println!();
    sim.cpu.dump_state();
    if cli.stats {
        sim.cpu.stats.print();
    }
}
