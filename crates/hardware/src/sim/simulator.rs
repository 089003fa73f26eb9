//! Simulator: owns the CPU and drives it until a stop condition.
//!
//! A run stops when the cycle budget is exhausted, when the PC reaches the end
//! of memory (if enabled), or when a step fails. Step failures are returned to
//! the caller with the CPU left in place so its state can still be dumped.

use serde::Serialize;
use tracing::info;

use crate::common::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::devices::Console;

/// Why a run ended without error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The configured number of cycles was executed.
    CycleBudgetExhausted,
    /// The PC reached the upper bound of memory.
    EndOfMemory,
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Cycles executed by this call to [`Simulator::run`].
    pub cycles: u64,
    /// Stop condition that ended the run.
    pub reason: StopReason,
}

/// Top-level simulator: CPU architectural state plus run limits.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    /// Maximum number of cycles executed by [`Simulator::run`].
    pub max_cycles: u64,
    /// Stop cleanly once the PC reaches the end of memory.
    pub stop_at_end_of_memory: bool,
}

impl Simulator {
    /// Creates a new simulator with `image` loaded at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`](crate::common::SimError::ImageTooLarge) if the image
    /// does not fit in the configured memory.
    pub fn new(image: &[u8], config: &Config) -> Result<Self> {
        Ok(Self::from_cpu(Cpu::new(image, config)?, config))
    }

    /// Creates a simulator whose UART writes to `console`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`](crate::common::SimError::ImageTooLarge) if the image
    /// does not fit in the configured memory.
    pub fn with_console(image: &[u8], config: &Config, console: Box<dyn Console>) -> Result<Self> {
        Ok(Self::from_cpu(
            Cpu::with_console(image, config, console)?,
            config,
        ))
    }

    const fn from_cpu(cpu: Cpu, config: &Config) -> Self {
        Self {
            cpu,
            max_cycles: config.general.max_cycles,
            stop_at_end_of_memory: config.general.stop_at_end_of_memory,
        }
    }

    /// Advances the simulator by one cycle.
    ///
    /// # Errors
    ///
    /// Propagates the fatal error of [`Cpu::step`].
    pub fn tick(&mut self) -> Result<()> {
        self.cpu.step()
    }

    /// Runs until the cycle budget is exhausted or the PC reaches the end of memory.
    ///
    /// # Errors
    ///
    /// Returns the first fatal step error; the CPU keeps the state it had when
    /// the error occurred.
    pub fn run(&mut self) -> Result<RunOutcome> {
        info!(
            "run started: budget {} cycles, {} bytes of memory",
            self.max_cycles,
            self.cpu.bus.len()
        );

        let mut cycles = 0;
        let reason = loop {
            if cycles >= self.max_cycles {
                break StopReason::CycleBudgetExhausted;
            }
            if self.stop_at_end_of_memory && self.cpu.pc as usize >= self.cpu.bus.len() {
                break StopReason::EndOfMemory;
            }
            self.tick()?;
            cycles += 1;
        };

        info!(
            "run stopped after {cycles} cycles ({reason:?}), pc = {:#010x}",
            self.cpu.pc
        );
        Ok(RunOutcome { cycles, reason })
    }
}
