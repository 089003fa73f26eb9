//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch comparisons. Register values are compared
//! either as two's-complement signed integers or as unsigned integers,
//! depending on the condition.

use crate::isa::instruction::BranchCond;

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Returns `true` if the branch is taken for operands `a` (`rs1`) and `b` (`rs2`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sim_core::core::units::bru::Bru;
    /// use rv32sim_core::isa::instruction::BranchCond;
    ///
    /// // -1 < 1 signed, but 0xFFFF_FFFF > 1 unsigned
    /// assert!(Bru::taken(BranchCond::Lt, 0xFFFF_FFFF, 1));
    /// assert!(!Bru::taken(BranchCond::Ltu, 0xFFFF_FFFF, 1));
    /// ```
    pub const fn taken(cond: BranchCond, a: u32, b: u32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => (a as i32) < (b as i32),
            BranchCond::Ge => (a as i32) >= (b as i32),
            BranchCond::Ltu => a < b,
            BranchCond::Geu => a >= b,
        }
    }
}
