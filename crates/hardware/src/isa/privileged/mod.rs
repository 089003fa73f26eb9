//! RISC-V System Instructions.
//!
//! Only the environment call and breakpoint encodings of the SYSTEM opcode are
//! recognized. Privilege modes, CSR instructions and trap returns are not modeled.

/// System opcode and immediate encodings for ECALL/EBREAK.
pub mod opcodes;
