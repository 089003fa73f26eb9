//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components that make up the emulated address
//! space: the backing memory and the memory-mapped devices it routes to.

/// Memory-mapped I/O device implementations.
pub mod devices;

/// Backing memory with MMIO interception.
pub mod memory;

pub use memory::Memory;
