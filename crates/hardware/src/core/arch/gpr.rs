//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for RV32I.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`) of 32 bits each.
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Formats the complete register state for diagnostic dumps.

use std::fmt;

use crate::common::NUM_REGISTERS;

/// Registers shown per line in the diagnostic dump.
const DUMP_COLUMNS: usize = 4;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified. Indices are masked to five bits,
/// matching the width of the instruction register fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `x0` always returns 0.
    #[inline(always)]
    pub const fn read(&self, idx: usize) -> u32 {
        let idx = idx % NUM_REGISTERS;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline(always)]
    pub const fn write(&mut self, idx: usize, val: u32) {
        let idx = idx % NUM_REGISTERS;
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a snapshot of all 32 registers as seen by software (`x0` reads 0).
    pub fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        std::array::from_fn(|i| self.read(i))
    }
}

impl fmt::Display for Gpr {
    /// Formats the registers four per line, e.g. `x 0: 0x00000000  x 1: 0x00000005 ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_REGISTERS).step_by(DUMP_COLUMNS) {
            for col in row..row + DUMP_COLUMNS {
                if col != row {
                    f.write_str("  ")?;
                }
                write!(f, "x{:>2}: {:#010x}", col, self.read(col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
