//! RISC-V RV32I interpreter library.
//!
//! This crate implements an instruction-level interpreter for the base 32-bit
//! RISC-V integer ISA with the following:
//! 1. **Core:** Register file, fetch, and the executor with its ALU, BRU and LSU.
//! 2. **ISA:** Field extraction, immediate reconstruction and instruction classification.
//! 3. **`SoC`:** Flat byte-addressable memory with a memory-mapped UART transmit port.
//! 4. **Simulation:** Image loading, configuration, the run loop, and statistics.
//!
//! # Example
//!
//! ```
//! use rv32sim_core::sim::demo;
//! use rv32sim_core::soc::devices::BufferConsole;
//! use rv32sim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::with_console(
//!     &demo::program(),
//!     &Config::default(),
//!     Box::new(BufferConsole::new()),
//! )?;
//! let _ = sim.run()?;
//! assert_eq!(sim.cpu.regs.read(3), 15);
//! assert_eq!(sim.cpu.pc, demo::PARK_PC);
//! # Ok::<(), rv32sim_core::common::SimError>(())
//! ```

/// Common types and constants (errors, field masks).
pub mod common;
/// Simulator configuration (defaults and JSON parsing).
pub mod config;
/// CPU core (arch state, fetch, execution, functional units).
pub mod core;
/// Instruction set (decode, instruction, ABI, RV32I, SYSTEM encodings).
pub mod isa;
/// Binary loader, run loop and demonstration program.
pub mod sim;
/// Memory and memory-mapped devices.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and stats.
pub use crate::core::Cpu;
/// Run-loop driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
