//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! RV32I base integer instruction set.
//!
//! # Modules
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit).
//! * `privileged`: SYSTEM opcode encodings (ECALL, EBREAK).
//! * `instruction`: Field extraction and the tagged [`Instruction`](instruction::Instruction) form.
//! * `decode`: Raw word to `Decoded` fields and `Instruction` variants.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RISC-V instruction formats.
pub mod decode;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// SYSTEM opcode definitions (environment call, breakpoint).
pub mod privileged;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
