//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RV32I instruction encodings in two
//! stages:
//! 1. **Field Extraction:** [`decode`] pulls the opcode, register indices and
//!    function codes out of the word and reconstructs all five sign-extended
//!    immediate formats (I, S, B, U, J).
//! 2. **Classification:** [`decode_instruction`] maps those fields onto the
//!    tagged [`Instruction`] form consumed by the executor.

use crate::isa::instruction::{AluOp, BranchCond, Decoded, Instruction, InstructionBits, MemWidth};
use crate::isa::privileged::opcodes as sys_opcodes;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Splits a word into its fields and every immediate format.
///
/// Decoding never fails; which immediate is meaningful is decided by
/// [`decode_instruction`].
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        funct3: inst.funct3(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct7: inst.funct7(),
        imm_i: decode_i_type_imm(inst),
        imm_s: decode_s_type_imm(inst),
        imm_b: decode_b_type_imm(inst),
        imm_u: decode_u_type_imm(inst),
        imm_j: decode_j_type_imm(inst),
    }
}

/// Decodes and classifies a raw instruction word.
pub fn decode_instruction(inst: u32) -> Instruction {
    Instruction::from(&decode(inst))
}

impl From<&Decoded> for Instruction {
    fn from(d: &Decoded) -> Self {
        match d.opcode {
            opcodes::OP_REG => classify_op(d),
            opcodes::OP_IMM => classify_op_imm(d),
            opcodes::OP_LOAD => classify_load(d),
            opcodes::OP_STORE => classify_store(d),
            opcodes::OP_BRANCH => classify_branch(d),
            opcodes::OP_LUI => Self::Lui {
                rd: d.rd,
                imm: d.imm_u,
            },
            opcodes::OP_AUIPC => Self::Auipc {
                rd: d.rd,
                imm: d.imm_u,
            },
            opcodes::OP_JAL => Self::Jal {
                rd: d.rd,
                offset: d.imm_j,
            },
            opcodes::OP_JALR => Self::Jalr {
                rd: d.rd,
                rs1: d.rs1,
                offset: d.imm_i,
            },
            // FENCE and FENCE.I both order nothing on a single in-order hart.
            opcodes::OP_MISC_MEM => Self::Fence,
            sys_opcodes::OP_SYSTEM => classify_system(d),
            _ => Self::Unknown {
                raw: d.raw,
                opcode: d.opcode,
            },
        }
    }
}

/// Register-register ALU form (OP, 0x33).
const fn classify_op(d: &Decoded) -> Instruction {
    let op = match (d.funct3, d.funct7) {
        (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
        (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
        (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
        (funct3::SLT, funct7::DEFAULT) => AluOp::Slt,
        (funct3::SLTU, funct7::DEFAULT) => AluOp::Sltu,
        (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
        (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
        (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
        (funct3::OR, funct7::DEFAULT) => AluOp::Or,
        (funct3::AND, funct7::DEFAULT) => AluOp::And,
        _ => return Instruction::Illegal(d.raw),
    };
    Instruction::Op {
        op,
        rd: d.rd,
        rs1: d.rs1,
        rs2: d.rs2,
    }
}

/// Register-immediate ALU form (OP-IMM, 0x13).
///
/// Shift amounts are the low five bits of the immediate; bit 10 of the
/// immediate picks SRAI over SRLI. Upper immediate bits of SLLI are ignored.
const fn classify_op_imm(d: &Decoded) -> Instruction {
    let op = match d.funct3 {
        funct3::ADD_SUB => AluOp::Add,
        funct3::SLL => AluOp::Sll,
        funct3::SLT => AluOp::Slt,
        funct3::SLTU => AluOp::Sltu,
        funct3::XOR => AluOp::Xor,
        funct3::SRL_SRA if d.imm_i & funct7::SRAI_IMM_BIT == 0 => AluOp::Srl,
        funct3::SRL_SRA => AluOp::Sra,
        funct3::OR => AluOp::Or,
        funct3::AND => AluOp::And,
        _ => return Instruction::Illegal(d.raw),
    };
    Instruction::OpImm {
        op,
        rd: d.rd,
        rs1: d.rs1,
        imm: d.imm_i,
    }
}

/// Loads (0x03).
const fn classify_load(d: &Decoded) -> Instruction {
    let (width, signed) = match d.funct3 {
        funct3::LB => (MemWidth::Byte, true),
        funct3::LH => (MemWidth::Half, true),
        funct3::LW => (MemWidth::Word, true),
        funct3::LBU => (MemWidth::Byte, false),
        funct3::LHU => (MemWidth::Half, false),
        _ => return Instruction::Illegal(d.raw),
    };
    Instruction::Load {
        width,
        signed,
        rd: d.rd,
        rs1: d.rs1,
        offset: d.imm_i,
    }
}

/// Stores (0x23).
const fn classify_store(d: &Decoded) -> Instruction {
    let width = match d.funct3 {
        funct3::SB => MemWidth::Byte,
        funct3::SH => MemWidth::Half,
        funct3::SW => MemWidth::Word,
        _ => return Instruction::Illegal(d.raw),
    };
    Instruction::Store {
        width,
        rs1: d.rs1,
        rs2: d.rs2,
        offset: d.imm_s,
    }
}

/// Conditional branches (0x63).
const fn classify_branch(d: &Decoded) -> Instruction {
    let cond = match d.funct3 {
        funct3::BEQ => BranchCond::Eq,
        funct3::BNE => BranchCond::Ne,
        funct3::BLT => BranchCond::Lt,
        funct3::BGE => BranchCond::Ge,
        funct3::BLTU => BranchCond::Ltu,
        funct3::BGEU => BranchCond::Geu,
        _ => return Instruction::Illegal(d.raw),
    };
    Instruction::Branch {
        cond,
        rs1: d.rs1,
        rs2: d.rs2,
        offset: d.imm_b,
    }
}

/// SYSTEM (0x73): only ECALL and EBREAK are recognized.
const fn classify_system(d: &Decoded) -> Instruction {
    match (d.funct3, d.imm_i) {
        (funct3::PRIV, sys_opcodes::IMM_ECALL) => Instruction::Ecall,
        (funct3::PRIV, sys_opcodes::IMM_EBREAK) => Instruction::Ebreak,
        _ => Instruction::Illegal(d.raw),
    }
}

/// Bits `hi..=lo` of `inst`, shifted down to bit 0.
const fn bits(inst: u32, hi: u32, lo: u32) -> u32 {
    (inst >> lo) & ((1 << (hi - lo + 1)) - 1)
}

/// Sign-extends the low `width` bits of `val`.
const fn sign_extend(val: u32, width: u32) -> i32 {
    let shift = u32::BITS - width;
    (val << shift) as i32 >> shift
}

/// `imm[11:0]` lives in bits 31:20 (loads, JALR, OP-IMM).
const fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> 20
}

/// `imm[11:5]` in bits 31:25, `imm[4:0]` in bits 11:7.
const fn decode_s_type_imm(inst: u32) -> i32 {
    let imm = (bits(inst, 31, 25) << 5) | bits(inst, 11, 7);
    sign_extend(imm, 12)
}

/// Branch offsets are even: `imm[12|10:5]` in bits 31:25, `imm[4:1|11]` in bits 11:7.
const fn decode_b_type_imm(inst: u32) -> i32 {
    let imm = (bits(inst, 31, 31) << 12)
        | (bits(inst, 7, 7) << 11)
        | (bits(inst, 30, 25) << 5)
        | (bits(inst, 11, 8) << 1);
    sign_extend(imm, 13)
}

/// Upper 20 bits in place, low 12 bits zero.
const fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & !0xFFF) as i32
}

/// Jump offsets are even: `imm[20|10:1|11|19:12]` in bits 31:12.
const fn decode_j_type_imm(inst: u32) -> i32 {
    let imm = (bits(inst, 31, 31) << 20)
        | (bits(inst, 19, 12) << 12)
        | (bits(inst, 20, 20) << 11)
        | (bits(inst, 30, 21) << 1);
    sign_extend(imm, 21)
}
