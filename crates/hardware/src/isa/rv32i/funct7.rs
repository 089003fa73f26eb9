//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (e.g., ADD vs SUB).

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;

/// Bit of the 12-bit I-immediate selecting SRAI over SRLI.
///
/// This is the same instruction bit (30) that carries the alternate `funct7`
/// encoding in the register-register form.
pub const SRAI_IMM_BIT: i32 = 0x400;
