//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, program counter, and reserved CSRs.
//! 2. **Memory:** Owns the backing memory and the UART attached to it.
//! 3. **Stepping:** Runs one fetch-decode-execute cycle per call to [`Cpu::step`].
//! 4. **Diagnostics:** Formats the architectural state for end-of-run dumps.

/// Instruction execution and next-PC selection.
pub mod execution;

/// Instruction fetch from memory.
pub mod fetch;

use std::fmt;

use tracing::trace;

use crate::common::{INSTRUCTION_SIZE, Result};
use crate::config::Config;
use crate::core::arch::{Csrs, Gpr};
use crate::isa::decode::decode_instruction;
use crate::soc::Memory;
use crate::soc::devices::{Console, StdConsole, Uart};
use crate::stats::SimStats;

pub use self::execution::Flow;

/// Main CPU structure containing all processor state.
///
/// A `Cpu` is created once from a binary image and mutated in place by every
/// [`step`](Cpu::step). It is exclusively owned; independent instances may
/// coexist in one process.
#[derive(Debug)]
pub struct Cpu {
    /// Program Counter.
    pub pc: u32,
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Control and Status Registers (reserved, never accessed by instructions).
    pub csrs: Csrs,
    /// Backing memory and MMIO.
    pub bus: Memory,
    /// Execution statistics.
    pub stats: SimStats,
    /// Emit a trace event for every executed instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with `image` loaded at address 0 and UART output on the host console.
    ///
    /// # Arguments
    ///
    /// * `image` - Raw program bytes.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`](crate::common::SimError::ImageTooLarge) if the image
    /// does not fit in the configured memory.
    pub fn new(image: &[u8], config: &Config) -> Result<Self> {
        let console = StdConsole::new(config.system.uart_to_stderr);
        Self::with_console(image, config, Box::new(console))
    }

    /// Creates a CPU whose UART writes to the given console.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`](crate::common::SimError::ImageTooLarge) if the image
    /// does not fit in the configured memory.
    pub fn with_console(image: &[u8], config: &Config, console: Box<dyn Console>) -> Result<Self> {
        let uart = Uart::new(config.system.uart_base, console);
        let mut bus = Memory::new(config.memory.ram_size, uart);
        bus.load_image(image)?;

        Ok(Self {
            pc: 0,
            regs: Gpr::new(),
            csrs: Csrs::default(),
            bus,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        })
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// The PC is updated exactly once: to the jump target if execution
    /// redirected control flow, otherwise to the next sequential instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FetchOutOfBounds`](crate::common::SimError::FetchOutOfBounds) if the
    /// instruction window at the PC leaves memory. No state other than the cycle
    /// counter changes in that case.
    pub fn step(&mut self) -> Result<()> {
        self.stats.cycles += 1;
        let raw = self.fetch(self.pc)?;
        let inst = decode_instruction(raw);

        if self.trace {
            trace!("{:#010x}: {raw:#010x} {inst:?}", self.pc);
        }

        let flow = self.execute(inst);
        self.pc = match flow {
            Flow::Jump(target) => target,
            Flow::Next => self.pc.wrapping_add(INSTRUCTION_SIZE),
        };
        self.stats.record(&inst, matches!(flow, Flow::Jump(_)));
        Ok(())
    }

    /// Dumps the current CPU state (registers and PC) to stdout.
    pub fn dump_state(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.regs)?;
        writeln!(f, "PC : {:#010x}", self.pc)
    }
}
