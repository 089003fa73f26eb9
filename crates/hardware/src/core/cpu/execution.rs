//! Instruction Execution.
//!
//! This module implements the execute half of the CPU cycle. It performs the following:
//! 1. **Dispatch:** Matches the decoded [`Instruction`] exhaustively.
//! 2. **Functional Units:** Routes arithmetic to the ALU, comparisons to the BRU,
//!    and memory traffic to the LSU.
//! 3. **Control Flow:** Reports the next-PC decision as a [`Flow`] value; the
//!    PC itself is only written by [`Cpu::step`].

use tracing::{debug, warn};

use super::Cpu;
use crate::common::INSTRUCTION_SIZE;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::Instruction;

/// Next-PC decision produced by executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next sequential instruction (`pc + 4`).
    Next,
    /// Continue at the given absolute address.
    Jump(u32),
}

impl Cpu {
    /// Executes one instruction against the current architectural state.
    ///
    /// Registers and memory are updated in place. The PC is read but never
    /// written here; the returned [`Flow`] tells the caller where to go next.
    ///
    /// # Arguments
    ///
    /// * `inst` - The classified instruction located at `self.pc`.
    pub fn execute(&mut self, inst: Instruction) -> Flow {
        let pc = self.pc;

        match inst {
            Instruction::Op { op, rd, rs1, rs2 } => {
                let val = Alu::execute(op, self.regs.read(rs1), self.regs.read(rs2));
                self.regs.write(rd, val);
                Flow::Next
            }
            Instruction::OpImm { op, rd, rs1, imm } => {
                let val = Alu::execute(op, self.regs.read(rs1), imm as u32);
                self.regs.write(rd, val);
                Flow::Next
            }
            Instruction::Load {
                width,
                signed,
                rd,
                rs1,
                offset,
            } => {
                let addr = self.regs.read(rs1).wrapping_add(offset as u32);
                let val = Lsu::load(&self.bus, addr, width, signed);
                self.regs.write(rd, val);
                Flow::Next
            }
            Instruction::Store {
                width,
                rs1,
                rs2,
                offset,
            } => {
                let addr = self.regs.read(rs1).wrapping_add(offset as u32);
                Lsu::store(&mut self.bus, addr, width, self.regs.read(rs2));
                Flow::Next
            }
            Instruction::Branch {
                cond,
                rs1,
                rs2,
                offset,
            } => {
                if Bru::taken(cond, self.regs.read(rs1), self.regs.read(rs2)) {
                    Flow::Jump(pc.wrapping_add(offset as u32))
                } else {
                    Flow::Next
                }
            }
            Instruction::Lui { rd, imm } => {
                self.regs.write(rd, imm as u32);
                Flow::Next
            }
            Instruction::Auipc { rd, imm } => {
                self.regs.write(rd, pc.wrapping_add(imm as u32));
                Flow::Next
            }
            Instruction::Jal { rd, offset } => {
                self.regs.write(rd, pc.wrapping_add(INSTRUCTION_SIZE));
                Flow::Jump(pc.wrapping_add(offset as u32))
            }
            Instruction::Jalr { rd, rs1, offset } => {
                // Target first: rd may alias rs1.
                let target = self.regs.read(rs1).wrapping_add(offset as u32) & !1;
                self.regs.write(rd, pc.wrapping_add(INSTRUCTION_SIZE));
                Flow::Jump(target)
            }
            Instruction::Fence => {
                debug!("fence at {pc:#010x}");
                Flow::Next
            }
            Instruction::Ecall => {
                debug!("ecall at {pc:#010x} ignored");
                Flow::Next
            }
            Instruction::Ebreak => {
                debug!("ebreak at {pc:#010x} ignored");
                Flow::Next
            }
            Instruction::Illegal(raw) => {
                warn!("illegal instruction {raw:#010x} at {pc:#010x} skipped");
                Flow::Next
            }
            Instruction::Unknown { raw, opcode } => {
                warn!("unknown opcode {opcode:#04x} ({raw:#010x}) at {pc:#010x} skipped");
                Flow::Next
            }
        }
    }
}
