//! Execution units and functional components.
//!
//! This module contains the functional units used by the executor: the
//! integer ALU, the branch resolution unit, and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branch comparisons.
pub mod bru;

/// Load/Store Unit for sized memory accesses.
pub mod lsu;
