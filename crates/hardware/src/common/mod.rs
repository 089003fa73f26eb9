//! Common utilities and types used throughout the interpreter.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Instruction width, field masks, register count.
//! 2. **Error Handling:** The fatal [`SimError`] type and the crate `Result` alias.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for fatal simulation conditions.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_REGISTERS};
pub use error::{Result, SimError};
