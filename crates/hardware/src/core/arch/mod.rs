//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state of an RV32I hart:
//! 1. **GPRs:** General-Purpose Register file implementation.
//! 2. **CSRs:** Reserved control/status registers (inert).

/// Control and Status Register (CSR) definitions.
pub mod csr;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use self::csr::Csrs;
pub use self::gpr::Gpr;
