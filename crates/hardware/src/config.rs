//! Configuration system for the interpreter.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (RAM size, UART address, cycle budget).
//! 2. **Structures:** Hierarchical config for general, system, and memory settings.
//! 3. **Parsing:** JSON deserialization with per-field defaults.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built from `Config::default()`.

use serde::Deserialize;

use crate::common::Result;

/// Default configuration constants for the simulator.
mod defaults {
    /// Total size of emulated memory (1 MiB), mapped at address 0.
    pub const RAM_SIZE: usize = 1024 * 1024;

    /// Address of the memory-mapped UART transmit port.
    pub const UART_BASE: u32 = 0x1000_0000;

    /// Upper bound on the number of instructions a run may execute.
    pub const MAX_CYCLES: u64 = 100;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory map settings.
    #[serde(default)]
    pub system: SystemConfig,
    /// Backing memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`](crate::common::SimError::Config) if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event with the decoded fields of every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Maximum number of instructions executed by [`Simulator::run`](crate::sim::Simulator::run).
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Stop the run cleanly once the PC reaches the end of memory.
    #[serde(default = "GeneralConfig::default_stop_at_end_of_memory")]
    pub stop_at_end_of_memory: bool,
}

impl GeneralConfig {
    /// Returns the default cycle budget.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    /// Stopping at the end of memory is on unless disabled.
    const fn default_stop_at_end_of_memory() -> bool {
        true
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_cycles: defaults::MAX_CYCLES,
            stop_at_end_of_memory: true,
        }
    }
}

/// Memory-mapped I/O configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// UART transmit port address (byte stores only).
    #[serde(default = "SystemConfig::default_uart_base")]
    pub uart_base: u32,

    /// When true, UART output goes to stderr instead of stdout.
    #[serde(default)]
    pub uart_to_stderr: bool,
}

impl SystemConfig {
    /// Returns the default UART port address.
    const fn default_uart_base() -> u32 {
        defaults::UART_BASE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            uart_base: defaults::UART_BASE,
            uart_to_stderr: false,
        }
    }
}

/// Backing memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Capacity of emulated memory in bytes.
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
        }
    }
}
