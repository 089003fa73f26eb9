//! RISC-V Application Binary Interface (ABI) register name constants.
//!
//! Defines standard RISC-V ABI register names and their corresponding
//! register indices.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x17 (system call number, a7).
pub const REG_A7: usize = 17;
