//! RISC-V System Opcodes.
//!
//! Defines the SYSTEM opcode and the I-immediate values that select ECALL and EBREAK.

/// System instruction opcode (0b1110011).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Environment Call (ECALL), full encoding.
pub const ECALL: u32 = 0x0000_0073;

/// Environment Break (EBREAK), full encoding.
pub const EBREAK: u32 = 0x0010_0073;

/// I-immediate of ECALL.
pub const IMM_ECALL: i32 = 0;

/// I-immediate of EBREAK.
pub const IMM_EBREAK: i32 = 1;
