//! Global System Constants.
//!
//! This module defines constants shared by the decoder, executor and memory:
//! 1. **Instruction Constants:** Instruction width and the field masks and shifts.
//! 2. **Register Constants:** Number of architectural registers.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Bit mask for extracting the opcode field from a RISC-V instruction.
pub const OPCODE_MASK: u32 = 0x7F;

/// Bit mask for the 5-bit register index fields.
pub const REG_MASK: u32 = 0x1F;

/// Bit position shift for the destination register (rd) field.
pub const RD_SHIFT: u32 = 7;

/// Bit position shift for the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;

/// Bit mask for the funct3 field.
pub const FUNCT3_MASK: u32 = 0x7;

/// Bit position shift for the first source register (rs1) field.
pub const RS1_SHIFT: u32 = 15;

/// Bit position shift for the second source register (rs2) field.
pub const RS2_SHIFT: u32 = 20;

/// Bit position shift for the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// Bit mask for the funct7 field.
pub const FUNCT7_MASK: u32 = 0x7F;

/// Shift amounts for RV32 use the low five bits of the operand.
pub const SHAMT_MASK: u32 = 0x1F;
