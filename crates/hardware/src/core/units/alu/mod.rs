//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the RV32I integer ALU used by the executor for both
//! the register-register and register-immediate instruction forms.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::instruction::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Operands are raw 32-bit register values; signedness is applied per
/// operation, never stored.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs1`)
    /// * `b`  - Second operand (`rs2` or the I-immediate reinterpreted as `u32`;
    ///   shifts use its low five bits)
    ///
    /// # Returns
    ///
    /// The 32-bit result of the ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::alu::Alu;
    /// use rv32sim_core::isa::instruction::AluOp;
    ///
    /// // Wrapping addition
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    ///
    /// // Signed vs unsigned comparison of the same bits
    /// assert_eq!(Alu::execute(AluOp::Slt, 0xFFFF_FFFF, 1), 1);
    /// assert_eq!(Alu::execute(AluOp::Sltu, 0xFFFF_FFFF, 1), 0);
    ///
    /// // Arithmetic shift keeps the sign
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), 0xF800_0000);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
