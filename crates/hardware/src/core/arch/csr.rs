//! Control and Status Register (CSR) storage.
//!
//! Holds the machine-mode registers a later privileged extension would use.
//! No RV32I instruction reads or writes them, so they stay zero.

/// Reserved control and status registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Csrs {
    /// Machine status register.
    pub mstatus: u32,
    /// Machine exception program counter.
    pub mepc: u32,
    /// Address translation register.
    pub satp: u32,
}
