//! Core processor implementation.
//!
//! This module contains the CPU implementation: the architectural state, the
//! functional units used by the executor, and the step logic that ties them
//! together.

/// Architecture-specific components (register file, reserved CSRs).
pub mod arch;

/// CPU core implementation (fetch, execute, step).
pub mod cpu;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::cpu::Cpu;
