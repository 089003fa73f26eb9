//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the fixed RV32I instruction fields,
//! the `Decoded` field bundle produced by the decoder, and the tagged
//! [`Instruction`] form matched by the executor.

use crate::common::constants::{
    FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, OPCODE_MASK, RD_SHIFT, REG_MASK,
    RS1_SHIFT, RS2_SHIFT,
};

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard and alternate encodings (ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every immediate format is reconstructed for every word; which one is
/// meaningful depends on the opcode. All immediates are sign-extended `i32`
/// values, reinterpreted as unsigned only at the point of use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 7.
    pub funct7: u32,
    /// I-type immediate (12 bits, sign-extended).
    pub imm_i: i32,
    /// S-type store offset (12 bits, sign-extended).
    pub imm_s: i32,
    /// B-type branch offset (13 bits, bit 0 zero, sign-extended).
    pub imm_b: i32,
    /// U-type upper immediate (bits 31:12, low 12 bits zero).
    pub imm_u: i32,
    /// J-type jump offset (21 bits, bit 0 zero, sign-extended).
    pub imm_j: i32,
}

/// Integer ALU operations shared by the register and immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    Add,
    /// Integer subtraction (register form only).
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit byte access.
    Byte,
    /// 16-bit half-word access.
    Half,
    /// 32-bit word access.
    Word,
}

/// Comparison performed by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `rs1 == rs2`.
    Eq,
    /// `rs1 != rs2`.
    Ne,
    /// `rs1 < rs2`, signed.
    Lt,
    /// `rs1 >= rs2`, signed.
    Ge,
    /// `rs1 < rs2`, unsigned.
    Ltu,
    /// `rs1 >= rs2`, unsigned.
    Geu,
}

/// A fully classified RV32I instruction.
///
/// Produced once per step by [`decode_instruction`](crate::isa::decode::decode_instruction)
/// and matched exhaustively by the executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register ALU operation: `rd = rs1 op rs2`.
    Op {
        /// ALU operation.
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// First source register.
        rs1: usize,
        /// Second source register.
        rs2: usize,
    },
    /// Register-immediate ALU operation: `rd = rs1 op imm`.
    OpImm {
        /// ALU operation (never `Sub`).
        op: AluOp,
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Sign-extended I-immediate; shifts use its low five bits.
        imm: i32,
    },
    /// Load from `rs1 + offset` into `rd`.
    Load {
        /// Access width.
        width: MemWidth,
        /// Sign-extend (LB/LH) rather than zero-extend (LBU/LHU).
        signed: bool,
        /// Destination register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Sign-extended I-immediate offset.
        offset: i32,
    },
    /// Store the low bits of `rs2` to `rs1 + offset`.
    Store {
        /// Access width.
        width: MemWidth,
        /// Base address register.
        rs1: usize,
        /// Source data register.
        rs2: usize,
        /// Sign-extended S-immediate offset.
        offset: i32,
    },
    /// Conditional branch to `pc + offset`.
    Branch {
        /// Comparison.
        cond: BranchCond,
        /// First compared register.
        rs1: usize,
        /// Second compared register.
        rs2: usize,
        /// Sign-extended B-immediate offset.
        offset: i32,
    },
    /// Load upper immediate: `rd = imm`.
    Lui {
        /// Destination register.
        rd: usize,
        /// U-immediate.
        imm: i32,
    },
    /// Add upper immediate to PC: `rd = pc + imm`.
    Auipc {
        /// Destination register.
        rd: usize,
        /// U-immediate.
        imm: i32,
    },
    /// Jump and link: `rd = pc + 4; pc += offset`.
    Jal {
        /// Link register.
        rd: usize,
        /// Sign-extended J-immediate offset.
        offset: i32,
    },
    /// Jump and link register: `rd = pc + 4; pc = (rs1 + offset) & !1`.
    Jalr {
        /// Link register.
        rd: usize,
        /// Base register.
        rs1: usize,
        /// Sign-extended I-immediate offset.
        offset: i32,
    },
    /// Memory ordering fence; a no-op on a single in-order hart.
    Fence,
    /// Environment call; recognized, no effect.
    Ecall,
    /// Breakpoint; recognized, no effect.
    Ebreak,
    /// Known opcode with an unassigned `funct3`/`funct7`/immediate combination.
    Illegal(u32),
    /// Opcode outside RV32I.
    Unknown {
        /// Raw instruction word.
        raw: u32,
        /// Its opcode field.
        opcode: u32,
    },
}
