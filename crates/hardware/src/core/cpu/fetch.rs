//! Instruction Fetch.
//!
//! Reads the 4-byte little-endian instruction word at a given PC. Unlike data
//! loads, a fetch whose window leaves memory is fatal.

use tracing::error;

use super::Cpu;
use crate::common::Result;

impl Cpu {
    /// Fetches the instruction word at `pc`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FetchOutOfBounds`](crate::common::SimError::FetchOutOfBounds)
    /// carrying `pc` if any of the four bytes lies outside memory.
    pub fn fetch(&self, pc: u32) -> Result<u32> {
        self.bus.fetch32(pc).inspect_err(|_| {
            error!(
                "instruction fetch at {pc:#010x} outside memory of {} bytes",
                self.bus.len()
            );
        })
    }
}
